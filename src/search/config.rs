//! Row filter configuration for one search box / table pair.

use serde::Deserialize;

use crate::error::{UiError, UiResult};

/// Everything one table search needs to resolve its elements.
///
/// Validated on construction, immutable afterwards. JS callers pass a plain
/// object with camelCase keys:
///
/// ```javascript,ignore
/// setupTableSearch({
///     searchInputId: "searchPending",
///     tableId: "pendingTable",
///     rowSelector: ".payslip-row",
///     cellSelectors: [".employee-name", ".staff-id", ".month-year"],
///     countElementId: "pendingCount",
///     noResultsRowId: "noResultsRow",
///     colspan: 7
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTableSearchConfig")]
pub struct TableSearchConfig {
    search_input_id: String,
    table_id: String,
    row_selector: String,
    cell_selectors: Vec<String>,
    count_element_id: String,
    no_results_row_id: String,
    colspan: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableSearchConfig {
    search_input_id: String,
    table_id: String,
    row_selector: String,
    cell_selectors: Vec<String>,
    count_element_id: String,
    no_results_row_id: String,
    colspan: u32,
}

impl TryFrom<RawTableSearchConfig> for TableSearchConfig {
    type Error = UiError;

    fn try_from(raw: RawTableSearchConfig) -> UiResult<Self> {
        TableSearchConfig::new(
            raw.search_input_id,
            raw.table_id,
            raw.row_selector,
            raw.cell_selectors,
            raw.count_element_id,
            raw.no_results_row_id,
            raw.colspan,
        )
    }
}

fn require(field: &str, value: &str) -> UiResult<()> {
    if value.trim().is_empty() {
        return Err(UiError::InvalidConfig(format!("{} must not be empty", field)));
    }
    Ok(())
}

impl TableSearchConfig {
    pub fn new(
        search_input_id: impl Into<String>,
        table_id: impl Into<String>,
        row_selector: impl Into<String>,
        cell_selectors: Vec<String>,
        count_element_id: impl Into<String>,
        no_results_row_id: impl Into<String>,
        colspan: u32,
    ) -> UiResult<Self> {
        let config = Self {
            search_input_id: search_input_id.into(),
            table_id: table_id.into(),
            row_selector: row_selector.into(),
            cell_selectors,
            count_element_id: count_element_id.into(),
            no_results_row_id: no_results_row_id.into(),
            colspan,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> UiResult<()> {
        require("searchInputId", &self.search_input_id)?;
        require("tableId", &self.table_id)?;
        require("rowSelector", &self.row_selector)?;
        require("countElementId", &self.count_element_id)?;
        require("noResultsRowId", &self.no_results_row_id)?;

        if self.cell_selectors.is_empty() {
            return Err(UiError::InvalidConfig(
                "cellSelectors must name at least one selector".to_string(),
            ));
        }
        for selector in &self.cell_selectors {
            require("cellSelectors entry", selector)?;
        }
        if self.colspan == 0 {
            return Err(UiError::InvalidConfig("colspan must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn search_input_id(&self) -> &str {
        &self.search_input_id
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn row_selector(&self) -> &str {
        &self.row_selector
    }

    pub fn cell_selectors(&self) -> &[String] {
        &self.cell_selectors
    }

    pub fn count_element_id(&self) -> &str {
        &self.count_element_id
    }

    pub fn no_results_row_id(&self) -> &str {
        &self.no_results_row_id
    }

    pub fn colspan(&self) -> u32 {
        self.colspan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pending() -> UiResult<TableSearchConfig> {
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

    #[test]
    fn test_new_valid() {
        let config = pending().unwrap();
        assert_eq!(config.table_id(), "pendingTable");
        assert_eq!(config.cell_selectors().len(), 3);
        assert_eq!(config.colspan(), 7);
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = TableSearchConfig::new(
            "  ",
            "pendingTable",
            ".payslip-row",
            selectors(&[".employee-name"]),
            "pendingCount",
            "noResultsRow",
            7,
        )
        .unwrap_err();
        assert_eq!(
            err,
            UiError::InvalidConfig("searchInputId must not be empty".to_string())
        );
    }

    #[test]
    fn test_rejects_no_cell_selectors() {
        let err = TableSearchConfig::new(
            "searchPending",
            "pendingTable",
            ".payslip-row",
            Vec::new(),
            "pendingCount",
            "noResultsRow",
            7,
        )
        .unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_colspan() {
        let err = TableSearchConfig::new(
            "searchPending",
            "pendingTable",
            ".payslip-row",
            selectors(&[".employee-name"]),
            "pendingCount",
            "noResultsRow",
            0,
        )
        .unwrap_err();
        assert_eq!(err, UiError::InvalidConfig("colspan must be at least 1".to_string()));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "searchInputId": "searchRecent",
            "tableId": "recentTable",
            "rowSelector": ".recent-row",
            "cellSelectors": [".employee-name", ".month-year", ".status-cell"],
            "countElementId": "recentCount",
            "noResultsRowId": "noRecentResultsRow",
            "colspan": 6
        }"#;
        let config: TableSearchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.search_input_id(), "searchRecent");
        assert_eq!(config.row_selector(), ".recent-row");
        assert_eq!(config.no_results_row_id(), "noRecentResultsRow");
        assert_eq!(config.colspan(), 6);
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let json = r#"{
            "searchInputId": "searchRecent",
            "tableId": "recentTable",
            "rowSelector": ".recent-row",
            "cellSelectors": [],
            "countElementId": "recentCount",
            "noResultsRowId": "noRecentResultsRow",
            "colspan": 6
        }"#;
        let result: Result<TableSearchConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
