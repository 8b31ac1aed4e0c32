//! Newsletter signup, load-more, and subscribe button micro-interactions.
//! There is no backend; every "request" is a fixed-delay timer.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::forms;

use super::dom;

const SIGNED_UP_LABEL: &str = "登録完了！";
const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #00d896, #00a86b)";
const ERROR_BORDER: &str = "#ff4444";
const LOADING_LABEL: &str = "読み込み中...";
const EXHAUSTED_LABEL: &str = "すべて表示済み";

pub fn init() -> Result<(), JsValue> {
    init_newsletter()?;
    init_load_more()?;
    init_subscribe()?;
    Ok(())
}

fn init_newsletter() -> Result<(), JsValue> {
    let Some(form) = dom::select(".newsletter-form")? else {
        return Ok(());
    };
    let (Some(input), Some(submit)) = (
        form.query_selector(".email-input")?,
        form.query_selector(".submit-btn")?,
    ) else {
        log::debug!("newsletter form incomplete; skipping");
        return Ok(());
    };
    let input: HtmlInputElement = input.dyn_into()?;
    let submit: HtmlElement = submit.dyn_into()?;

    let submit_target = submit.clone();
    dom::on_click_event(&submit_target, move |event| {
        event.prevent_default();
        if let Err(e) = handle_submit(&input, &submit) {
            log::error!("newsletter submit failed: {:?}", e);
        }
    })
}

fn handle_submit(input: &HtmlInputElement, submit: &HtmlElement) -> Result<(), JsValue> {
    if forms::is_valid_email(&input.value()) {
        let original = submit.text_content().unwrap_or_default();
        submit.set_text_content(Some(SIGNED_UP_LABEL));
        submit.style().set_property("background", SUCCESS_BACKGROUND)?;

        let submit = submit.clone();
        let input = input.clone();
        dom::set_timeout(forms::SUCCESS_REVERT_MS, move || {
            submit.set_text_content(Some(&original));
            let _ = submit.style().remove_property("background");
            input.set_value("");
        })?;
    } else {
        // Invalid address: flash the border, leave the input untouched.
        input.style().set_property("border-color", ERROR_BORDER)?;

        let input = input.clone();
        dom::set_timeout(forms::ERROR_REVERT_MS, move || {
            let _ = input.style().remove_property("border-color");
        })?;
    }
    Ok(())
}

fn init_load_more() -> Result<(), JsValue> {
    let Some(button) = dom::select(".load-more-btn")? else {
        return Ok(());
    };
    let button: HtmlButtonElement = button.dyn_into()?;

    let pressed = button.clone();
    dom::on_click(&button, move || {
        pressed.set_text_content(Some(LOADING_LABEL));
        pressed.set_disabled(true);

        let settled = pressed.clone();
        let result = dom::set_timeout(forms::LOAD_MORE_MS, move || {
            settled.set_text_content(Some(EXHAUSTED_LABEL));
            let _ = settled.style().set_property("opacity", "0.5");
            let _ = settled.style().set_property("cursor", "not-allowed");
        });
        if let Err(e) = result {
            log::error!("load-more timer failed: {:?}", e);
        }
    })
}

fn init_subscribe() -> Result<(), JsValue> {
    for button in dom::select_all(".subscribe-btn")? {
        let Ok(button) = button.dyn_into::<HtmlElement>() else {
            continue;
        };
        let pressed = button.clone();
        dom::on_click(&button, move || {
            if pressed
                .style()
                .set_property("transform", "scale(0.95)")
                .is_err()
            {
                return;
            }
            let released = pressed.clone();
            let _ = dom::set_timeout(forms::PRESS_MS, move || {
                let _ = released.style().remove_property("transform");
            });
        })?;
    }
    Ok(())
}
