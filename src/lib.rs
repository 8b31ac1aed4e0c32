#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Browser scripting for the MedCast podcast landing page: tab navigation,
//! the mock episode player, newsletter/button micro-interactions, and the
//! decorative 3D canvas animation. Logic that never touches the DOM lives
//! in plain modules so it builds and tests on the host; everything that
//! does is gated to wasm32.

pub mod anim;
pub mod forms;
pub mod player;
pub mod rng;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod dom;
    pub mod forms_ui;
    pub mod player_ui;
    pub mod render;
    pub mod tabs;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("medcast page scripts starting");

        // Each subsystem checks for its own elements and quietly skips
        // wiring when they are absent, so a partial page still works.
        tabs::init()?;
        player_ui::init()?;
        forms_ui::init()?;
        render::init()?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
