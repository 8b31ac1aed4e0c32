//! The DNA helix scene: two offset strands of precomputed 3D points.

use std::f64::consts::PI;

use crate::anim::projection::{Camera, Projected};

/// Rungs per strand; the helix holds twice this many points.
pub const SEGMENTS: usize = 60;
/// Vertical extent of the helix in world units.
pub const HEIGHT: f64 = 600.0;
/// Strand radius around the vertical axis.
pub const RADIUS: f64 = 120.0;

const ROTATION_STEP: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    First,
    Second,
}

#[derive(Clone, Copy, Debug)]
pub struct HelixPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub strand: Strand,
}

/// Point list is generated once and never mutated; only the shared rotation
/// advances, applied at projection time.
pub struct DnaHelix {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: f64,
    points: Vec<HelixPoint>,
}

impl DnaHelix {
    pub fn new(x: f64, y: f64, z: f64) -> DnaHelix {
        let mut points = Vec::with_capacity(SEGMENTS * 2);
        for i in 0..SEGMENTS {
            let angle = (i as f64 / SEGMENTS as f64) * PI * 4.0;
            let y = (i as f64 / SEGMENTS as f64) * HEIGHT - HEIGHT / 2.0;
            points.push(HelixPoint {
                x: angle.cos() * RADIUS,
                y,
                z: angle.sin() * RADIUS,
                strand: Strand::First,
            });
            // Second strand sits half a turn around the same axis.
            let opposed = angle + PI;
            points.push(HelixPoint {
                x: opposed.cos() * RADIUS,
                y,
                z: opposed.sin() * RADIUS,
                strand: Strand::Second,
            });
        }
        DnaHelix {
            x,
            y,
            z,
            rotation: 0.0,
            points,
        }
    }

    pub fn points(&self) -> &[HelixPoint] {
        &self.points
    }

    /// Advance the shared rotation one frame. Unbounded on purpose; only
    /// its sine and cosine are ever read.
    pub fn update(&mut self) {
        self.rotation += ROTATION_STEP;
    }

    /// Rotate the point about the vertical axis by the current rotation,
    /// offset by the helix world position, then project.
    pub fn project(&self, point: &HelixPoint, camera: &Camera) -> Projected {
        let (sin, cos) = self.rotation.sin_cos();
        let x = point.x * cos - point.z * sin;
        let z = point.x * sin + point.z * cos;
        camera.project(x + self.x, point.y + self.y, z + self.z)
    }
}
