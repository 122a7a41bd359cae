//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use pagelet::error::Error;
use pagelet_dom::pages::{system_test_page, SYSTEM_TEST_PAGE};
use pagelet_dom::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static DOCUMENT: web_sys::Document = {
        let window = web_sys::window().unwrap();
        window.document().unwrap()
    };
}

fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).unwrap();
    });
}

fn fixture(html: &str) -> web_sys::Element {
    DOCUMENT.with(|document| {
        let wrapper = document.create_element("div").unwrap();
        wrapper
            .set_attribute("style", "height: 0; overflow: hidden")
            .unwrap();
        wrapper.set_inner_html(html);
        document.body().unwrap().append_child(&wrapper).unwrap();
        wrapper
    })
}

fn simulate_change(target: &web_sys::EventTarget) {
    let ev = web_sys::Event::new("change").unwrap();
    target.dispatch_event(&ev).unwrap();
}

fn language_select(wrapper: &web_sys::Element) -> web_sys::HtmlSelectElement {
    wrapper
        .query_selector(r#"[name="language"]"#)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn wildcards_input(wrapper: &web_sys::Element) -> web_sys::HtmlInputElement {
    wrapper
        .query_selector(r#"[name="wildcards"]"#)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

struct MarkingWidget {}

impl DropdownWidget for MarkingWidget {
    type Select = web_sys::Element;

    fn enhance(&self, select: &web_sys::Element) {
        select.set_attribute("data-enhanced", "").unwrap();
    }
}

#[wasm_bindgen_test]
fn page_context_reads_the_body_attribute() {
    init();
    assert_eq!(pagelet_dom::page_context().name(), "");
    DOCUMENT.with(|document| {
        let body = document.body().unwrap();
        body.set_attribute("data-page-name", SYSTEM_TEST_PAGE).unwrap();
        assert_eq!(pagelet_dom::page_context().name(), SYSTEM_TEST_PAGE);
        body.remove_attribute("data-page-name").unwrap();
    });
}

#[wasm_bindgen_test]
fn enhances_only_the_marked_selects() {
    init();
    let wrapper = fixture(concat!(
        r#"<select class="select select2"></select>"#,
        r#"<select class="select"></select>"#,
        r#"<select class="select select2"></select>"#,
    ));
    let query = DomSelectQuery::within(wrapper.clone());
    assert_eq!(enhance_selects(&query, &MarkingWidget {}), 2);
    assert_eq!(
        wrapper.query_selector_all("[data-enhanced]").unwrap().length(),
        2
    );
    assert!(wrapper
        .query_selector("select.select:not(.select2)[data-enhanced]")
        .unwrap()
        .is_none());
    wrapper.remove();
}

#[wasm_bindgen_test]
fn syncs_language_changes() {
    init();
    let wrapper = fixture(concat!(
        r#"<select name="language">"#,
        r#"<option value="cpp">C++</option>"#,
        r#"<option value="java">Java</option>"#,
        r#"<option value="tex">TeX</option>"#,
        r#"</select>"#,
        r#"<input name="wildcards" value="">"#,
    ));
    let select = language_select(&wrapper);
    let input = wildcards_input(&wrapper);
    let form = Rc::new(DomLanguageForm::query().unwrap());
    let sub = bind_wildcard_sync(&LANG_WILDCARDS, form);
    assert_eq!(input.value(), "*.c, *.h, *.cpp");
    select.set_value("java");
    simulate_change(&select);
    assert_eq!(input.value(), "*.java");
    select.set_value("tex");
    simulate_change(&select);
    assert_eq!(input.value(), "");
    select.set_value("java");
    sub.unsubscribe();
    simulate_change(&select);
    assert_eq!(input.value(), "");
    wrapper.remove();
}

#[wasm_bindgen_test]
fn system_test_page_mounts_by_name() {
    init();
    let wrapper = fixture(concat!(
        r#"<select name="language">"#,
        r#"<option value="cpp">C++</option>"#,
        r#"</select>"#,
        r#"<input name="wildcards" value="">"#,
    ));
    let input = wildcards_input(&wrapper);
    let page = system_test_page();
    assert!(!page.mount(&PageContext::new("home")));
    assert_eq!(input.value(), "");
    let ctx = PageContext::new(SYSTEM_TEST_PAGE);
    assert!(page.mount(&ctx));
    assert_eq!(input.value(), "*.c, *.h, *.cpp");
    assert!(!page.mount(&ctx));
    wrapper.remove();
}

#[wasm_bindgen_test]
fn reads_the_language_from_any_form_control() {
    init();
    let wrapper = fixture(concat!(
        r#"<textarea name="language">cpp</textarea>"#,
        r#"<input name="wildcards" value="">"#,
    ));
    let input = wildcards_input(&wrapper);
    let form = DomLanguageForm::query().unwrap();
    assert_eq!(form.language().as_deref(), Some("cpp"));
    sync_wildcards(&LANG_WILDCARDS, &form);
    assert_eq!(input.value(), "*.c, *.h, *.cpp");
    wrapper.remove();
}

#[wasm_bindgen_test]
fn missing_fields_are_reported() {
    init();
    assert!(matches!(
        DomLanguageForm::query(),
        Err(Error::FieldNotFound { field: "language" })
    ));
    let wrapper = fixture(r#"<select name="language"></select>"#);
    assert!(matches!(
        DomLanguageForm::query(),
        Err(Error::FieldNotFound { field: "wildcards" })
    ));
    wrapper.remove();
}
