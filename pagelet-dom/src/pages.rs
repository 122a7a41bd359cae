//! The builtin page behaviors.

use std::rc::Rc;

use pagelet::page::{AutoloadPage, NamedPage};
use pagelet::sync::bind_wildcard_sync;
use pagelet::wildcards::LANG_WILDCARDS;
use pagelet::enhance::enhance_selects;

use crate::form::DomLanguageForm;
use crate::widget::{DomSelectQuery, Select2Widget};

/// The page name the wildcard sync is registered on.
pub const SYSTEM_TEST_PAGE: &str = "contest_system_test";

/// The select enhancer, registered on every page.
pub fn select_page() -> AutoloadPage {
    AutoloadPage::new("select", |_| {
        let enhanced = enhance_selects(&DomSelectQuery::new(), &Select2Widget::new());
        log::debug!("Enhanced {} select elements", enhanced);
    })
}

/// The wildcard sync, registered on the system test page.
///
/// The change listener stays attached for the rest of the page lifetime.
pub fn system_test_page() -> NamedPage {
    NamedPage::new(SYSTEM_TEST_PAGE, |_| {
        let form = match DomLanguageForm::query() {
            Ok(form) => Rc::new(form),
            Err(err) => {
                log::debug!("Skipped wildcard sync: {}", err);
                return;
            }
        };
        bind_wildcard_sync(&LANG_WILDCARDS, form).forever();
    })
}
