#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn animation_starts_on_a_fresh_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id("medical-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    medcast_wasm::wasm::render::start(canvas).expect("render loop failed to start");
}

#[wasm_bindgen_test]
fn wiring_skips_missing_elements() {
    // A page without any of the expected markup must wire up as a no-op,
    // not an error.
    medcast_wasm::wasm::tabs::init().expect("tabs init");
    medcast_wasm::wasm::player_ui::init().expect("player init");
    medcast_wasm::wasm::forms_ui::init().expect("forms init");
}
