//! Background particle field, visible in every scene.

use crate::anim::projection::{Camera, Projected};
use crate::rng;

pub const PARTICLE_COUNT: usize = 50;

/// Depth extent particles live in.
pub const DEPTH_BOUND: f64 = 300.0;
const SPAWN_DEPTH: f64 = 500.0;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn spawn(width: f64, height: f64) -> Particle {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
            size: 0.0,
            opacity: 0.0,
        };
        p.reset(width, height);
        p
    }

    /// Fresh random placement across the current canvas extent. Bounds use
    /// the dimensions passed in, so a resize moves the respawn box from the
    /// next reset onward without touching live particles.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.x = rng::centered(width);
        self.y = rng::centered(height);
        self.z = rng::centered(SPAWN_DEPTH);
        self.vx = rng::centered(0.5);
        self.vy = rng::centered(0.5);
        self.vz = rng::centered(0.5);
        self.size = rng::random_f64() * 2.0 + 1.0;
        self.opacity = rng::random_f64() * 0.5 + 0.1;
    }

    /// Advance one frame. Leaving the box on any axis respawns the particle
    /// rather than clamping or wrapping it.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.z += self.vz;

        if self.x.abs() > width / 2.0 || self.y.abs() > height / 2.0 || self.z.abs() > DEPTH_BOUND {
            self.reset(width, height);
        }
    }

    pub fn project(&self, camera: &Camera) -> Projected {
        camera.project(self.x, self.y, self.z)
    }
}
