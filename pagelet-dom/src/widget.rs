//! The select enhancer binding.
//!
//! Element discovery runs over the live document;
//! the dropdown behavior itself comes from the select2 jQuery plugin,
//! consumed as a black box through a `wasm-bindgen` import.

use wasm_bindgen::{prelude::*, JsCast};

use pagelet::enhance::{DropdownWidget, SelectQuery};

/// The class selector marking elements for dropdown enhancement.
pub const ENHANCE_SELECTOR: &str = ".select.select2";

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery(select: &web_sys::Element) -> JQuery;

    #[wasm_bindgen(method)]
    fn select2(this: &JQuery);
}

/// The external select2 dropdown widget.
///
/// Requires jQuery and the select2 plugin to be loaded in the host page.
/// Exceptions thrown by the plugin are not caught.
pub struct Select2Widget {}

impl Select2Widget {
    /// Create a handle to the widget.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Select2Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownWidget for Select2Widget {
    type Select = web_sys::Element;

    fn enhance(&self, select: &web_sys::Element) {
        jquery(select).select2();
    }
}

/// Element discovery over the live document.
pub struct DomSelectQuery {
    root: Option<web_sys::Element>,
}

impl DomSelectQuery {
    /// Search the whole document.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Search only the subtree under the given element.
    pub fn within(root: web_sys::Element) -> Self {
        Self { root: Some(root) }
    }
}

impl Default for DomSelectQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectQuery for DomSelectQuery {
    type Select = web_sys::Element;

    fn enhanceable_selects(&self) -> Vec<web_sys::Element> {
        let list = match &self.root {
            Some(root) => root.query_selector_all(ENHANCE_SELECTOR),
            None => crate::DOCUMENT.with(|document| document.query_selector_all(ENHANCE_SELECTOR)),
        };
        let list = match list {
            Ok(list) => list,
            Err(err) => {
                log::error!(
                    "{}",
                    crate::backend_error("Cannot query the enhanceable selects", &err)
                );
                return Vec::new();
            }
        };
        let mut ret = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(elem) = node.dyn_into::<web_sys::Element>() {
                    ret.push(elem);
                }
            }
        }
        ret
    }
}
