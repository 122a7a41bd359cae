//! The language form binding.
//!
//! Locates the language / wildcards field pair by their `name` attributes
//! and exposes them through the accessor trait of the core crate.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use pagelet::error::Error;
use pagelet::form::{ChangeSubscription, LanguageForm};

const LANGUAGE_SELECTOR: &str = r#"[name="language"]"#;
const WILDCARDS_SELECTOR: &str = r#"[name="wildcards"]"#;

/// The live field pair of the current document.
pub struct DomLanguageForm {
    language: web_sys::Element,
    wildcards: web_sys::HtmlInputElement,
}

impl DomLanguageForm {
    /// Locate the field pair in the current document.
    pub fn query() -> Result<Self, Error> {
        crate::DOCUMENT.with(|document| Self::query_in(document))
    }

    /// Locate the field pair in the given document.
    pub fn query_in(document: &web_sys::Document) -> Result<Self, Error> {
        let language = find_field(document, LANGUAGE_SELECTOR, "language")?;
        let wildcards = find_field(document, WILDCARDS_SELECTOR, "wildcards")?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| Error::FieldNotFound { field: "wildcards" })?;
        Ok(Self {
            language,
            wildcards,
        })
    }
}

fn find_field(
    document: &web_sys::Document,
    selector: &str,
    field: &'static str,
) -> Result<web_sys::Element, Error> {
    document
        .query_selector(selector)
        .map_err(|err| {
            crate::backend_error(&format!("Cannot query the form field {:?}", field), &err)
        })?
        .ok_or(Error::FieldNotFound { field })
}

// The form-control value the way jQuery `.val()` reads it:
// typed getters for the usual controls, a raw property read for the rest.
fn field_value(elem: &web_sys::Element) -> Option<String> {
    if let Some(select) = elem.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(input) = elem.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    js_sys::Reflect::get(elem, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
}

impl LanguageForm for DomLanguageForm {
    fn language(&self) -> Option<String> {
        field_value(&self.language)
    }

    fn set_wildcards(&self, value: &str) {
        self.wildcards.set_value(value);
    }

    fn on_language_change(&self, handler: Box<dyn 'static + Fn()>) -> ChangeSubscription {
        let cb = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| handler());
        let target: web_sys::EventTarget = self.language.clone().into();
        if let Err(err) = target.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        {
            log::error!(
                "{}",
                crate::backend_error("Cannot attach the language change listener", &err)
            );
            return ChangeSubscription::noop();
        }
        // the subscription owns the closure, so the listener lives until detach
        ChangeSubscription::new(move || {
            if let Err(err) =
                target.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            {
                log::error!(
                    "{}",
                    crate::backend_error("Cannot detach the language change listener", &err)
                );
            }
        })
    }
}
