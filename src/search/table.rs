//! DOM side of table search: captures rows, applies a [`FilterPass`] and
//! manages the "no results" row.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::error::UiResult;
use crate::search::config::TableSearchConfig;
use crate::search::filter::{self, FilterPass, NoResults};

const MESSAGE_CELL_CLASS: &str = "text-center py-4 text-muted";
const MESSAGE_ICON_CLASS: &str = "bi bi-search";

/// One wired search box. Rows are captured once at setup.
pub(crate) struct TableSearch {
    config: TableSearchConfig,
    document: Document,
    input: HtmlInputElement,
    table: Element,
    count: Element,
    rows: Vec<HtmlElement>,
}

impl TableSearch {
    fn resolve(config: TableSearchConfig) -> UiResult<Option<Self>> {
        let Some(document) = dom::document() else {
            return Ok(None);
        };
        let input = dom::element_by_id::<HtmlInputElement>(config.search_input_id());
        let table = dom::element_by_id::<Element>(config.table_id());
        let count = dom::element_by_id::<Element>(config.count_element_id());

        let (Some(input), Some(table), Some(count)) = (input, table, count) else {
            web_sys::console::log_1(
                &format!(
                    "[TableSearch] #{} / #{} / #{} not all present, skipping",
                    config.search_input_id(),
                    config.table_id(),
                    config.count_element_id()
                )
                .into(),
            );
            return Ok(None);
        };

        let rows = dom::query_all_in::<HtmlElement>(&table, config.row_selector())?;

        Ok(Some(Self {
            config,
            document,
            input,
            table,
            count,
            rows,
        }))
    }

    fn cell_texts(&self, row: &HtmlElement) -> UiResult<Vec<Option<String>>> {
        self.config
            .cell_selectors()
            .iter()
            .map(|selector| -> UiResult<Option<String>> {
                Ok(row
                    .query_selector(selector)?
                    .map(|cell| cell.text_content().unwrap_or_default()))
            })
            .collect()
    }

    /// Filter against the current input value and update the page.
    pub(crate) fn apply(&self) -> UiResult<FilterPass> {
        let raw_query = self.input.value();
        let cells = self
            .rows
            .iter()
            .map(|row| self.cell_texts(row))
            .collect::<UiResult<Vec<_>>>()?;

        let pass = filter::run_filter(&raw_query, cells);

        for (row, visible) in self.rows.iter().zip(&pass.visible) {
            dom::set_visible(row, *visible)?;
        }
        self.count
            .set_text_content(Some(&pass.visible_count.to_string()));

        match &pass.no_results {
            NoResults::Show(message) => self.show_no_results(message)?,
            NoResults::Hide => {
                if let Some(row) = self.no_results_row()? {
                    dom::set_visible(&row, false)?;
                }
            }
        }

        Ok(pass)
    }

    /// The message row, if one with the configured id lives in this table.
    ///
    /// Searched inside the table only, so another element with the same id
    /// elsewhere on the page is never picked up.
    fn no_results_row(&self) -> UiResult<Option<HtmlElement>> {
        let id = self.config.no_results_row_id();
        Ok(dom::query_all_in::<HtmlElement>(&self.table, "tr")?
            .into_iter()
            .find(|row| row.id() == id))
    }

    fn show_no_results(&self, message: &str) -> UiResult<()> {
        if let Some(row) = self.no_results_row()? {
            if let Some(cell) = row.query_selector("td")? {
                self.fill_message(&cell, message)?;
            }
            return dom::set_visible(&row, true);
        }

        let tr = self.document.create_element("tr")?;
        tr.set_id(self.config.no_results_row_id());

        let td = self.document.create_element("td")?;
        td.set_attribute("colspan", &self.config.colspan().to_string())?;
        td.set_class_name(MESSAGE_CELL_CLASS);
        self.fill_message(&td, message)?;
        tr.append_child(&td)?;

        let parent = self.table.query_selector("tbody")?.unwrap_or_else(|| self.table.clone());
        parent.append_child(&tr)?;
        Ok(())
    }

    /// Replace the cell content with the search icon and the message.
    ///
    /// The query goes in as a text node and is never parsed as markup.
    fn fill_message(&self, cell: &Element, message: &str) -> UiResult<()> {
        cell.set_text_content(None);

        let icon = self.document.create_element("i")?;
        icon.set_class_name(MESSAGE_ICON_CLASS);
        cell.append_child(&icon)?;

        let text = self.document.create_text_node(&format!(" {}", message));
        cell.append_child(&text)?;
        Ok(())
    }
}

/// Handle to a wired table search.
///
/// Host code does not need it for normal use; it allows re-running the
/// filter after the input value is set programmatically.
#[wasm_bindgen]
pub struct TableSearchHandle {
    inner: Rc<TableSearch>,
}

#[wasm_bindgen]
impl TableSearchHandle {
    /// Re-run the filter with the current input value. Returns the visible count.
    #[wasm_bindgen]
    pub fn refresh(&self) -> Result<usize, JsValue> {
        self.inner
            .apply()
            .map(|pass| pass.visible_count)
            .map_err(JsValue::from)
    }

    /// Number of rows captured at setup.
    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.inner.rows.len()
    }
}

/// Wire live filtering for one table. `Ok(None)` when the search input,
/// table or count element is missing.
pub fn setup_table_search(config: TableSearchConfig) -> UiResult<Option<TableSearchHandle>> {
    let Some(search) = TableSearch::resolve(config)? else {
        return Ok(None);
    };
    let search = Rc::new(search);

    let listener = Rc::clone(&search);
    dom::listen(&search.input, "input", move |_| {
        if let Err(e) = listener.apply() {
            web_sys::console::error_1(
                &format!("[TableSearch] #{}: {}", listener.config.table_id(), e).into(),
            );
        }
    })?;

    Ok(Some(TableSearchHandle { inner: search }))
}

/// JS entry taking a plain config object (see [`TableSearchConfig`]).
#[wasm_bindgen(js_name = setupTableSearch)]
pub fn setup_table_search_js(config: JsValue) -> Result<Option<TableSearchHandle>, JsValue> {
    let config: TableSearchConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    setup_table_search(config).map_err(JsValue::from)
}
