//! "Select all" checkbox wiring.

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::dom;
use crate::error::UiResult;

/// Wire the checkbox `master_id` so toggling it sets every element matching
/// `checkbox_selector` to the same checked state.
///
/// The group is queried when the master changes, so rows rendered after
/// setup are included. Returns `Ok(false)` when the master is not on the page.
pub fn setup_select_all(master_id: &str, checkbox_selector: &str) -> UiResult<bool> {
    let Some(master) = dom::element_by_id::<HtmlInputElement>(master_id) else {
        return Ok(false);
    };

    let selector = checkbox_selector.to_string();
    let source = master.clone();
    dom::listen(&master, "change", move |_| {
        let Some(doc) = dom::document() else {
            return;
        };
        let checked = source.checked();
        match dom::query_all::<HtmlInputElement>(&doc, &selector) {
            Ok(boxes) => {
                for checkbox in boxes {
                    checkbox.set_checked(checked);
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[SelectAll] {}", e).into());
            }
        }
    })?;

    Ok(true)
}

/// JS entry: `setupSelectAll("selectAll", ".payslip-checkbox")`.
#[wasm_bindgen(js_name = setupSelectAll)]
pub fn setup_select_all_js(master_id: &str, checkbox_selector: &str) -> Result<bool, JsValue> {
    setup_select_all(master_id, checkbox_selector).map_err(JsValue::from)
}
