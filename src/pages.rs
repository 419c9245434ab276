//! Per-page setups with the ids and selectors the payroll templates render.

use wasm_bindgen::prelude::*;

use crate::autofill::{setup_employee_autofill, AutofillConfig};
use crate::bulk::{setup_bulk_guard, BulkGuardConfig};
use crate::dom;
use crate::error::UiResult;
use crate::search::{setup_table_search, TableSearchConfig};
use crate::selection::setup_select_all;

pub const SELECT_ALL_ID: &str = "selectAll";
pub const PAYSLIP_CHECKBOX: &str = ".payslip-checkbox";

fn selectors(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Pending payslips awaiting approval.
pub fn pending_payslips() -> UiResult<TableSearchConfig> {
    TableSearchConfig::new(
        "searchPending",
        "pendingTable",
        ".payslip-row",
        selectors(&[".employee-name", ".staff-id", ".month-year"]),
        "pendingCount",
        "noResultsRow",
        7,
    )
}

/// Recently processed payslips.
pub fn recent_payslips() -> UiResult<TableSearchConfig> {
    TableSearchConfig::new(
        "searchRecent",
        "recentTable",
        ".recent-row",
        selectors(&[".employee-name", ".month-year", ".status-cell"]),
        "recentCount",
        "noRecentResultsRow",
        6,
    )
}

/// Which parts of a page were actually wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproveListWiring {
    pub select_all: bool,
    pub pending_search: bool,
    pub recent_search: bool,
    pub bulk_guard: bool,
}

/// Everything the approval list page wires, with the template ids by default.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveListSetup {
    pub select_all_id: String,
    pub checkbox_selector: String,
    pub pending: TableSearchConfig,
    pub recent: TableSearchConfig,
    pub bulk: BulkGuardConfig,
}

impl ApproveListSetup {
    pub fn new() -> UiResult<Self> {
        Ok(Self {
            select_all_id: SELECT_ALL_ID.to_string(),
            checkbox_selector: PAYSLIP_CHECKBOX.to_string(),
            pending: pending_payslips()?,
            recent: recent_payslips()?,
            bulk: BulkGuardConfig::default(),
        })
    }

    /// Wire each part independently; a part that fails is logged and
    /// reported as not wired, the others still go ahead.
    pub fn wire(&self) -> ApproveListWiring {
        let wiring = ApproveListWiring {
            select_all: wired(
                "select all",
                setup_select_all(&self.select_all_id, &self.checkbox_selector),
            ),
            pending_search: wired(
                "pending search",
                setup_table_search(self.pending.clone()).map(|h| h.is_some()),
            ),
            recent_search: wired(
                "recent search",
                setup_table_search(self.recent.clone()).map(|h| h.is_some()),
            ),
            bulk_guard: wired("bulk guard", setup_bulk_guard(self.bulk.clone())),
        };

        web_sys::console::log_1(&format!("[ApproveList] wired {:?}", wiring).into());
        wiring
    }
}

fn wired(part: &str, result: UiResult<bool>) -> bool {
    result.unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[ApproveList] {}: {}", part, e).into());
        false
    })
}

pub fn init_approve_list() -> UiResult<ApproveListWiring> {
    Ok(ApproveListSetup::new()?.wire())
}

/// Payslip approval list: select-all, both table searches and the bulk guard.
#[wasm_bindgen(js_name = initApproveListPage)]
pub fn init_approve_list_page() -> Result<(), JsValue> {
    init_approve_list().map(|_| ()).map_err(JsValue::from)
}

/// Payslip generation form: employee autofill, run once the DOM is ready.
///
/// `enhancer` is the searchable-select initializer, e.g.
/// `(el, opts) => $(el).select2(opts)`.
#[wasm_bindgen(js_name = initPayslipGeneratePage)]
pub fn init_payslip_generate_page(enhancer: Option<js_sys::Function>) -> Result<(), JsValue> {
    dom::on_ready(move || {
        if let Err(e) = setup_employee_autofill(&AutofillConfig::default(), enhancer.as_ref()) {
            web_sys::console::error_1(&format!("[PayslipGenerate] {}", e).into());
        }
    })
    .map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_preset() {
        let config = pending_payslips().unwrap();
        assert_eq!(config.search_input_id(), "searchPending");
        assert_eq!(
            config.cell_selectors(),
            &[".employee-name", ".staff-id", ".month-year"]
        );
        assert_eq!(config.colspan(), 7);
    }

    #[test]
    fn test_recent_preset() {
        let config = recent_payslips().unwrap();
        assert_eq!(config.table_id(), "recentTable");
        assert_eq!(config.no_results_row_id(), "noRecentResultsRow");
        assert_eq!(config.colspan(), 6);
    }

    #[test]
    fn test_setup_defaults() {
        let setup = ApproveListSetup::new().unwrap();
        assert_eq!(setup.select_all_id, "selectAll");
        assert_eq!(setup.checkbox_selector, ".payslip-checkbox");
        assert_eq!(setup.pending, pending_payslips().unwrap());
        assert_eq!(setup.bulk.form_id, "bulkApproveForm");
    }
}
