//! The wildcard sync behavior.
//!
//! Keeps the wildcards field equal to the joined table entry for the
//! currently selected language.
//! Runs once when the page initializes and again on every language change;
//! each run is synchronous and idempotent.

use std::rc::Rc;

use crate::form::{ChangeSubscription, LanguageForm};
use crate::wildcards::WildcardTable;

/// Write the wildcards for the currently selected language into the form.
///
/// A missing or unrecognized language writes the empty string.
pub fn sync_wildcards(table: &WildcardTable, form: &impl LanguageForm) {
    let lang = form.language().unwrap_or_default();
    form.set_wildcards(&table.joined_wildcards(&lang));
}

/// Sync the form now and on every future language change.
///
/// The listener stays attached for as long as the returned subscription
/// is kept alive.
pub fn bind_wildcard_sync<F>(table: &'static WildcardTable, form: Rc<F>) -> ChangeSubscription
where
    F: 'static + LanguageForm,
{
    sync_wildcards(table, &*form);
    let f = form.clone();
    form.on_language_change(Box::new(move || sync_wildcards(table, &*f)))
}
