//! Decorative 3D canvas animation: perspective projection, a floating
//! particle field, and two alternating hero scenes (DNA helix, neuron
//! network). Everything here is plain state and math; drawing lives in the
//! wasm render module.

pub mod helix;
pub mod network;
pub mod particle;
pub mod projection;

/// Milliseconds each hero scene stays on screen.
pub const SCENE_MS: f64 = 8_000.0;
/// Full helix-then-network cycle length.
pub const CYCLE_MS: f64 = 2.0 * SCENE_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Helix,
    Network,
}

impl Scene {
    /// Scene shown at wall-clock time `now_ms`: the first half of every
    /// cycle belongs to the helix, the second to the network. The switch is
    /// a hard cut at the boundary, no cross-fade.
    pub fn at(now_ms: f64) -> Scene {
        if now_ms.rem_euclid(CYCLE_MS) < SCENE_MS {
            Scene::Helix
        } else {
            Scene::Network
        }
    }
}
