//! Wires the mock episode player to its buttons, progress bar, and clock.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::player::{Player, Tick, Toggle};

use super::dom;

const PLAY_LABEL: &str = "再生";
const PAUSE_LABEL: &str = "一時停止";
const TICK_MS: i32 = 1_000;

const BUTTON_SELECTOR: &str = ".play-btn, .play-btn-small";

/// Shared player state plus the single outstanding ticker handle.
/// `start_ticker` always clears the previous handle first, so at most one
/// interval exists per player at any time.
struct PlayerUi {
    player: RefCell<Player>,
    ticker: RefCell<Option<i32>>,
}

pub fn init() -> Result<(), JsValue> {
    let buttons = dom::select_all(BUTTON_SELECTOR)?;
    if buttons.is_empty() {
        log::debug!("no play buttons on page; player not wired");
        return Ok(());
    }

    let ui = Rc::new(PlayerUi {
        player: RefCell::new(Player::new()),
        ticker: RefCell::new(None),
    });

    for button in buttons {
        let ui = Rc::clone(&ui);
        let pressed = button.clone();
        dom::on_click(&button, move || {
            let Some(episode) = pressed.get_attribute("data-episode") else {
                return;
            };
            if let Err(e) = toggle(&ui, &episode, &pressed) {
                log::error!("play toggle failed: {:?}", e);
            }
        })?;
    }

    if let Some(bar) = dom::select(".progress-bar")? {
        let ui = Rc::clone(&ui);
        let bar_rect = bar.clone();
        dom::on_click_event(&bar, move |event| {
            let rect = bar_rect.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let fraction = (event.client_x() as f64 - rect.left()) / rect.width();
            ui.player.borrow_mut().seek(fraction);
            if let Err(e) = paint_progress(&ui.player.borrow()) {
                log::error!("seek repaint failed: {:?}", e);
            }
        })?;
    }

    Ok(())
}

fn toggle(ui: &Rc<PlayerUi>, episode: &str, button: &Element) -> Result<(), JsValue> {
    let outcome = ui.player.borrow_mut().toggle(episode);
    match outcome {
        Toggle::Started => {
            // Every button back to its idle face first, then flip the one
            // that was pressed.
            render_all_idle()?;
            render_button(button, true)?;
            start_ticker(ui)?;
        }
        Toggle::Paused => {
            render_button(button, false)?;
            stop_ticker(ui);
        }
    }
    Ok(())
}

fn start_ticker(ui: &Rc<PlayerUi>) -> Result<(), JsValue> {
    stop_ticker(ui);

    let tick_ui = Rc::clone(ui);
    let callback = Closure::wrap(Box::new(move || {
        let outcome = tick_ui.player.borrow_mut().tick();
        match outcome {
            Tick::Advanced => {
                if let Err(e) = paint_progress(&tick_ui.player.borrow()) {
                    log::error!("progress repaint failed: {:?}", e);
                }
            }
            Tick::Finished => {
                stop_ticker(&tick_ui);
                if let Err(e) = render_all_idle() {
                    log::error!("player reset failed: {:?}", e);
                }
            }
        }
    }) as Box<dyn FnMut()>);

    let id = dom::window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            TICK_MS,
        )?;
    callback.forget();
    *ui.ticker.borrow_mut() = Some(id);
    Ok(())
}

fn stop_ticker(ui: &PlayerUi) {
    if let Some(id) = ui.ticker.borrow_mut().take() {
        if let Ok(window) = dom::window() {
            window.clear_interval_with_handle(id);
        }
    }
}

/// Large buttons swap their play/pause icons; small ones swap their label.
fn render_button(button: &Element, playing: bool) -> Result<(), JsValue> {
    let play_icon = button.query_selector(".play-icon")?;
    let pause_icon = button.query_selector(".pause-icon")?;
    match (play_icon, pause_icon) {
        (Some(play), Some(pause)) => {
            set_display(&play, if playing { "none" } else { "block" })?;
            set_display(&pause, if playing { "block" } else { "none" })?;
        }
        _ => {
            if button.class_list().contains("play-btn-small") {
                button.set_text_content(Some(if playing { PAUSE_LABEL } else { PLAY_LABEL }));
            }
        }
    }
    Ok(())
}

fn render_all_idle() -> Result<(), JsValue> {
    for button in dom::select_all(BUTTON_SELECTOR)? {
        render_button(&button, false)?;
    }
    Ok(())
}

fn paint_progress(player: &Player) -> Result<(), JsValue> {
    if let Some(fill) = dom::select(".progress-fill")? {
        if let Some(fill) = fill.dyn_ref::<HtmlElement>() {
            fill.style()
                .set_property("width", &format!("{}%", player.progress() * 100.0))?;
        }
    }
    if let Some(clock) = dom::select(".time")? {
        clock.set_text_content(Some(&player.clock()));
    }
    Ok(())
}

fn set_display(element: &Element, value: &str) -> Result<(), JsValue> {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        element.style().set_property("display", value)?;
    }
    Ok(())
}
