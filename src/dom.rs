//! Thin helpers over `web-sys` for the lookups and mutations every component
//! repeats: id lookup with casting, selector queries, display toggling, form
//! field values and listener registration.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, NodeList,
};

use crate::error::UiResult;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it. `None` when absent or of another type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements under `root` matching `selector`, skipping nodes that are not `T`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> UiResult<Vec<T>> {
    Ok(collect_nodes(root.query_selector_all(selector)?))
}

/// Document-wide variant of [`query_all_in`].
pub fn query_all<T: JsCast>(doc: &Document, selector: &str) -> UiResult<Vec<T>> {
    Ok(collect_nodes(doc.query_selector_all(selector)?))
}

fn collect_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Reset `display` to the stylesheet default, or set it to `none`.
pub fn set_visible(el: &HtmlElement, visible: bool) -> UiResult<()> {
    el.style()
        .set_property("display", if visible { "" } else { "none" })?;
    Ok(())
}

pub fn is_hidden(el: &HtmlElement) -> bool {
    el.style()
        .get_property_value("display")
        .map(|v| v == "none")
        .unwrap_or(false)
}

/// Current value of an `<input>`, `<select>` or `<textarea>`.
pub fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}

/// Write a form field value. Returns false when the element is not a form field.
pub fn set_field_value(el: &Element, value: &str) -> bool {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        return false;
    }
    true
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> UiResult<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` once the document has been parsed: immediately when it already
/// has, otherwise on `DOMContentLoaded`.
pub fn on_ready<F>(f: F) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return Ok(());
    };

    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}
