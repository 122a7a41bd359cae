//! pagelet: page initialization behaviors for web form pages
//!
//! This is the *DOM binding* crate.
//!
//! ### Quick Start
//!
//! The behaviors are mounted once from the wasm entry point.
//!
//! ```no_run
//! use wasm_bindgen::prelude::*;
//!
//! #[wasm_bindgen(start)]
//! pub fn wasm_main() {
//!     pagelet_dom::init();
//! }
//! ```
//!
//! `init` reads the current page name from the `<body>` element and mounts
//! every builtin behavior that applies to it:
//! the select enhancer on every page,
//! and the wildcard sync on the system test page.

#![warn(missing_docs)]

use wasm_bindgen::{JsCast, JsValue};

use pagelet::page::{mount_all, PageContext, PageEntry};
use pagelet::Error;

pub mod form;
pub mod pages;
pub mod widget;

/// The types that should usually be imported.
pub mod prelude {
    pub use pagelet::prelude::*;

    pub use crate::form::DomLanguageForm;
    pub use crate::widget::{DomSelectQuery, Select2Widget};
}

thread_local! {
    pub(crate) static DOCUMENT: web_sys::Document = {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("Cannot mount page behaviors without a browser document")
    };
}

// Wrap a JS-side failure, keeping its message when one is carried.
pub(crate) fn backend_error(msg: &str, err: &JsValue) -> Error {
    let msg = match err.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{}: {}", msg, String::from(err.message())),
        None => msg.to_string(),
    };
    Error::BackendError { msg }
}

/// Read the loader context from the current document.
///
/// The page name is taken from the `data-page-name` attribute of the
/// `<body>` element; a document without one yields an unnamed context.
pub fn page_context() -> PageContext {
    let name = DOCUMENT
        .with(|document| {
            document
                .body()
                .and_then(|body| body.get_attribute("data-page-name"))
        })
        .unwrap_or_default();
    PageContext::new(name)
}

/// Mount the builtin page behaviors for the current document.
///
/// Call once from the wasm entry point.
/// Returns the number of behaviors that ran.
pub fn init() -> usize {
    let ctx = page_context();
    let select = pages::select_page();
    let system_test = pages::system_test_page();
    let pages: [&dyn PageEntry; 2] = [&select, &system_test];
    mount_all(pages, &ctx)
}
