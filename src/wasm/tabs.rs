//! Hamburger menu and desktop/mobile tab navigation.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::dom;

pub fn init() -> Result<(), JsValue> {
    init_hamburger()?;
    init_tabs()?;
    Ok(())
}

fn init_hamburger() -> Result<(), JsValue> {
    let (Some(burger), Some(nav)) = (dom::select(".hamburger-menu")?, dom::select(".mobile-nav")?)
    else {
        log::debug!("hamburger menu not present; skipping");
        return Ok(());
    };

    let burger_state = burger.clone();
    dom::on_click(&burger, move || {
        let _ = burger_state.class_list().toggle("active");
        let _ = nav.class_list().toggle("show");
    })
}

fn init_tabs() -> Result<(), JsValue> {
    for tab in dom::select_all(".tab-btn")? {
        let Some(target) = tab.get_attribute("data-tab") else {
            continue;
        };
        dom::on_click(&tab, move || {
            if let Err(e) = activate_tab(&target) {
                log::error!("tab switch failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

/// Activate the named tab in both navs, show its panel, scroll up, and
/// close the mobile menu if it is open.
fn activate_tab(target: &str) -> Result<(), JsValue> {
    for tab in dom::select_all(".tab-btn")? {
        if tab.get_attribute("data-tab").as_deref() == Some(target) {
            tab.class_list().add_1("active")?;
        } else {
            tab.class_list().remove_1("active")?;
        }
    }

    for panel in dom::select_all(".content-panel")? {
        panel.class_list().remove_1("active")?;
        if panel.id() == target {
            panel.class_list().add_1("active")?;
        }
    }

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);

    if let Some(nav) = dom::select(".mobile-nav")? {
        if nav.class_list().contains("show") {
            nav.class_list().remove_1("show")?;
            if let Some(burger) = dom::select(".hamburger-menu")? {
                burger.class_list().remove_1("active")?;
            }
        }
    }
    Ok(())
}
