//! The neuron network scene: drifting 3D nodes with pulsing connections.

use std::f64::consts::TAU;

use crate::anim::projection::{Camera, Projected};
use crate::rng;

pub const NEURON_COUNT: usize = 25;
pub const BOUND_X: f64 = 300.0;
pub const BOUND_Y: f64 = 300.0;
pub const BOUND_Z: f64 = 200.0;
/// Pairs closer than this at generation time are eligible to connect.
pub const LINK_RADIUS: f64 = 250.0;

const PULSE_STEP: f64 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct Neuron {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub pulse: f64,
}

impl Neuron {
    /// Pulse brightness in `[0, 1]`, the "signal" carried by this neuron's
    /// outgoing connections.
    pub fn signal(&self) -> f64 {
        (self.pulse.sin() + 1.0) / 2.0
    }

    pub fn project(&self, camera: &Camera) -> Projected {
        camera.project(self.x, self.y, self.z)
    }
}

/// Undirected edge between two neuron indices, fixed after generation.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub strength: f64,
}

pub struct NeuronNetwork {
    pub neurons: Vec<Neuron>,
    pub connections: Vec<Connection>,
}

impl NeuronNetwork {
    /// Random nodes inside the box, then a coin flip for every pair close
    /// enough to link. Connections are never added or removed afterwards.
    pub fn generate() -> NeuronNetwork {
        let mut neurons = Vec::with_capacity(NEURON_COUNT);
        for _ in 0..NEURON_COUNT {
            neurons.push(Neuron {
                x: rng::centered(BOUND_X * 2.0),
                y: rng::centered(BOUND_Y * 2.0),
                z: rng::centered(BOUND_Z * 2.0),
                vx: rng::centered(0.5),
                vy: rng::centered(0.5),
                vz: rng::centered(0.5),
                pulse: rng::random_f64() * TAU,
            });
        }

        let mut connections = Vec::new();
        for i in 0..neurons.len() {
            for j in (i + 1)..neurons.len() {
                if distance(&neurons[i], &neurons[j]) < LINK_RADIUS && rng::random_f64() > 0.5 {
                    connections.push(Connection {
                        from: i,
                        to: j,
                        strength: rng::random_f64(),
                    });
                }
            }
        }
        log::debug!("neuron network: {} connections", connections.len());

        NeuronNetwork {
            neurons,
            connections,
        }
    }

    /// Drift every neuron one frame and bounce it off the invisible box:
    /// the offending velocity component flips sign, the position is left
    /// where it landed, so brief excursions outside the box are expected.
    pub fn update(&mut self) {
        for n in &mut self.neurons {
            n.x += n.vx;
            n.y += n.vy;
            n.z += n.vz;
            n.pulse += PULSE_STEP;

            if n.x.abs() > BOUND_X {
                n.vx = -n.vx;
            }
            if n.y.abs() > BOUND_Y {
                n.vy = -n.vy;
            }
            if n.z.abs() > BOUND_Z {
                n.vz = -n.vz;
            }
        }
    }
}

pub fn distance(a: &Neuron, b: &Neuron) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
