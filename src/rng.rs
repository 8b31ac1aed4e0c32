//! Uniform random source for the animation entities.
//!
//! Browser builds draw from `Math.random()`; host builds (tests, the dev
//! helper) use the `rand` crate so the same generation code runs under
//! `cargo test` without a browser.

/// Uniform value in `[0, 1)`.
#[cfg(target_family = "wasm")]
pub fn random_f64() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_family = "wasm"))]
pub fn random_f64() -> f64 {
    use rand::Rng;
    rand::thread_rng().gen()
}

/// Uniform value in `[-range/2, range/2)`.
pub fn centered(range: f64) -> f64 {
    (random_f64() - 0.5) * range
}
