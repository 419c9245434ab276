//! Payroll UI: client-side helpers for the payroll pages
//!
//! A Rust/WASM implementation of the small behaviours the payroll templates
//! need on top of server-rendered markup.
//!
//! # Architecture
//! - `selection.rs` - "Select all" checkbox wiring
//! - `search/` - Live table search: config, pure row matching, DOM wiring
//! - `bulk.rs` - Confirmation guard for the bulk-approve form
//! - `autofill/` - Employee picker autofill from embedded JSON
//! - `pages.rs` - Page setups with the template ids and selectors
//! - `dom.rs` - `web-sys` helpers
//! - `error.rs` - `UiError`
//!
//! Every setup tolerates missing elements by skipping its wiring.
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { initApproveListPage, initPayslipGeneratePage } from 'payroll-ui';
//!
//! await init();
//!
//! // payslip_approve_list.html
//! initApproveListPage();
//!
//! // payslip_generate.html
//! initPayslipGeneratePage((el, opts) => $(el).select2(opts));
//! ```

pub mod autofill;
pub mod bulk;
pub mod dom;
pub mod error;
pub mod pages;
pub mod search;
pub mod selection;

pub use autofill::*;
pub use bulk::*;
pub use error::*;
pub use pages::*;
pub use search::*;
pub use selection::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("payroll-ui v{}", env!("CARGO_PKG_VERSION"))
}
