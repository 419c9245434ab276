//! Confirmation guard for bulk-action forms.
//!
//! Submission is blocked when nothing is selected and otherwise goes through
//! a yes/no confirmation naming the selected count. The native POST is never
//! modified, only allowed or prevented.

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::error::UiResult;

/// What a submit with a given selection count should do.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkDecision {
    /// Prevent submission and show this notice
    Block(String),
    /// Ask this question; submit only if accepted
    Confirm(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkGuardConfig {
    pub form_id: String,
    pub checkbox_selector: String,
    /// Singular noun for the selected items ("payslip")
    pub item_noun: String,
    /// Verb used in the confirmation ("Approve")
    pub verb: String,
    /// Label of the submit button, quoted in the notice
    pub action_label: String,
}

impl Default for BulkGuardConfig {
    fn default() -> Self {
        Self {
            form_id: "bulkApproveForm".to_string(),
            checkbox_selector: ".payslip-checkbox".to_string(),
            item_noun: "payslip".to_string(),
            verb: "Approve".to_string(),
            action_label: "Approve Selected".to_string(),
        }
    }
}

impl BulkGuardConfig {
    pub fn new(form_id: impl Into<String>, checkbox_selector: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            checkbox_selector: checkbox_selector.into(),
            ..Self::default()
        }
    }

    pub fn decide(&self, selected: usize) -> BulkDecision {
        if selected == 0 {
            BulkDecision::Block(format!(
                "Please select at least one {} before clicking {}.",
                self.item_noun, self.action_label
            ))
        } else {
            BulkDecision::Confirm(format!(
                "{} {} selected {}(s)?",
                self.verb, selected, self.item_noun
            ))
        }
    }
}

fn checked_count(selector: &str) -> UiResult<usize> {
    let Some(doc) = dom::document() else {
        return Ok(0);
    };
    let boxes = dom::query_all::<HtmlInputElement>(&doc, selector)?;
    Ok(boxes.iter().filter(|b| b.checked()).count())
}

fn on_submit(config: &BulkGuardConfig, event: &Event) -> UiResult<()> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    match config.decide(checked_count(&config.checkbox_selector)?) {
        BulkDecision::Block(notice) => {
            event.prevent_default();
            window.alert_with_message(&notice)?;
        }
        BulkDecision::Confirm(question) => {
            let accepted = window.confirm_with_message(&question).unwrap_or_else(|e| {
                web_sys::console::warn_1(
                    &format!("[BulkGuard] confirm unavailable, submitting: {:?}", e).into(),
                );
                true
            });
            if !accepted {
                event.prevent_default();
            }
        }
    }
    Ok(())
}

/// Guard the form `config.form_id`. Returns `Ok(false)` when the form is absent.
pub fn setup_bulk_guard(config: BulkGuardConfig) -> UiResult<bool> {
    let Some(form) = dom::element_by_id::<HtmlFormElement>(&config.form_id) else {
        return Ok(false);
    };

    dom::listen(&form, "submit", move |event| {
        if let Err(e) = on_submit(&config, &event) {
            web_sys::console::error_1(&format!("[BulkGuard] #{}: {}", config.form_id, e).into());
        }
    })?;

    Ok(true)
}

/// JS entry: `setupBulkGuard("bulkApproveForm", ".payslip-checkbox")`.
#[wasm_bindgen(js_name = setupBulkGuard)]
pub fn setup_bulk_guard_js(form_id: &str, checkbox_selector: &str) -> Result<bool, JsValue> {
    setup_bulk_guard(BulkGuardConfig::new(form_id, checkbox_selector)).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_selected_blocks() {
        let config = BulkGuardConfig::default();
        assert_eq!(
            config.decide(0),
            BulkDecision::Block(
                "Please select at least one payslip before clicking Approve Selected.".to_string()
            )
        );
    }

    #[test]
    fn test_selection_asks_with_count() {
        let config = BulkGuardConfig::default();
        assert_eq!(
            config.decide(1),
            BulkDecision::Confirm("Approve 1 selected payslip(s)?".to_string())
        );
        assert_eq!(
            config.decide(12),
            BulkDecision::Confirm("Approve 12 selected payslip(s)?".to_string())
        );
    }

    #[test]
    fn test_new_keeps_default_wording() {
        let config = BulkGuardConfig::new("bulkRejectForm", ".reject-checkbox");
        assert_eq!(config.form_id, "bulkRejectForm");
        assert_eq!(config.checkbox_selector, ".reject-checkbox");
        assert_eq!(config.item_noun, "payslip");
    }

    #[test]
    fn test_custom_wording() {
        let config = BulkGuardConfig {
            item_noun: "claim".to_string(),
            verb: "Reject".to_string(),
            action_label: "Reject Selected".to_string(),
            ..BulkGuardConfig::default()
        };
        assert_eq!(
            config.decide(0),
            BulkDecision::Block(
                "Please select at least one claim before clicking Reject Selected.".to_string()
            )
        );
        assert_eq!(
            config.decide(3),
            BulkDecision::Confirm("Reject 3 selected claim(s)?".to_string())
        );
    }
}
