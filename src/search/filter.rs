//! Row matching for table search.
//!
//! Works on the text of each row's configured cells so the decision can be
//! made (and tested) without a DOM.

/// What to do with the synthetic "no results" row after a filter pass.
#[derive(Debug, Clone, PartialEq)]
pub enum NoResults {
    /// Create or update the row with this message and show it
    Show(String),
    /// Hide the row if it exists
    Hide,
}

/// Outcome of filtering every captured row against one query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPass {
    /// Visibility per row, in capture order
    pub visible: Vec<bool>,
    pub visible_count: usize,
    pub no_results: NoResults,
}

/// Trim and lowercase the raw search box value.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A row matches when any present cell contains `query` (already normalized).
/// Cells that did not resolve are `None` and never match.
pub fn row_matches<S: AsRef<str>>(cells: &[Option<S>], query: &str) -> bool {
    cells
        .iter()
        .flatten()
        .any(|text| text.as_ref().to_lowercase().contains(query))
}

pub fn no_results_message(raw_query: &str) -> String {
    format!("No results found for \"{}\"", raw_query)
}

/// Filter rows given as the texts of their configured cells.
///
/// An empty query shows every row and never asks for the message row.
pub fn run_filter<I, S>(raw_query: &str, rows: I) -> FilterPass
where
    I: IntoIterator<Item = Vec<Option<S>>>,
    S: AsRef<str>,
{
    let query = normalize_query(raw_query);

    let visible: Vec<bool> = rows
        .into_iter()
        .map(|cells| query.is_empty() || row_matches(&cells, &query))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    let no_results = if visible_count == 0 && !query.is_empty() {
        NoResults::Show(no_results_message(raw_query))
    } else {
        NoResults::Hide
    };

    FilterPass {
        visible,
        visible_count,
        no_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    fn payslip_rows() -> Vec<Vec<Option<String>>> {
        vec![
            row(&[Some("Ama Mensah"), Some("CA0012"), Some("January 2025")]),
            row(&[Some("Kofi Boateng"), Some("CA0044"), Some("January 2025")]),
            row(&[Some("Esi Owusu"), Some("CA0101"), Some("February 2025")]),
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Kofi  "), "kofi");
        assert_eq!(normalize_query("\tCA00\n"), "ca00");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_row_matches_any_cell() {
        let cells = row(&[Some("Ama Mensah"), Some("CA0012"), Some("January 2025")]);
        assert!(row_matches(&cells, "ca0012"));
        assert!(row_matches(&cells, "mensah"));
        assert!(row_matches(&cells, "january"));
        assert!(!row_matches(&cells, "kofi"));
    }

    #[test]
    fn test_missing_cells_never_match() {
        let cells = row(&[None, None]);
        assert!(!row_matches(&cells, "a"));

        let partial = row(&[None, Some("Approved")]);
        assert!(row_matches(&partial, "approved"));
    }

    #[test]
    fn test_single_row_match() {
        let pass = run_filter("CA0044", payslip_rows());
        assert_eq!(pass.visible, vec![false, true, false]);
        assert_eq!(pass.visible_count, 1);
        assert_eq!(pass.no_results, NoResults::Hide);
    }

    #[test]
    fn test_multiple_rows_match() {
        let pass = run_filter("january", payslip_rows());
        assert_eq!(pass.visible, vec![true, true, false]);
        assert_eq!(pass.visible_count, 2);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let pass = run_filter("   ESI ", payslip_rows());
        assert_eq!(pass.visible_count, 1);
        assert!(pass.visible[2]);
    }

    #[test]
    fn test_zero_matches_uses_raw_query() {
        let pass = run_filter("  Yaw ", payslip_rows());
        assert_eq!(pass.visible_count, 0);
        assert_eq!(
            pass.no_results,
            NoResults::Show("No results found for \"  Yaw \"".to_string())
        );
    }

    #[test]
    fn test_empty_query_shows_all() {
        let pass = run_filter("", payslip_rows());
        assert_eq!(pass.visible, vec![true, true, true]);
        assert_eq!(pass.visible_count, 3);
        assert_eq!(pass.no_results, NoResults::Hide);

        let blank = run_filter("    ", payslip_rows());
        assert_eq!(blank.visible_count, 3);
        assert_eq!(blank.no_results, NoResults::Hide);
    }

    #[test]
    fn test_empty_query_on_empty_table() {
        let pass = run_filter("", Vec::<Vec<Option<String>>>::new());
        assert_eq!(pass.visible_count, 0);
        assert_eq!(pass.no_results, NoResults::Hide);
    }

    #[test]
    fn test_query_on_empty_table_asks_for_message() {
        let pass = run_filter("ama", Vec::<Vec<Option<String>>>::new());
        assert_eq!(pass.visible_count, 0);
        assert!(matches!(pass.no_results, NoResults::Show(_)));
    }

    #[test]
    fn test_markup_is_kept_verbatim_in_message() {
        assert_eq!(
            no_results_message("<b>x</b>"),
            "No results found for \"<b>x</b>\""
        );
    }
}
