//! pagelet: page initialization behaviors for web form pages
//!
//! This is the *core* crate.
//! It models page behaviors independently of any browser environment,
//! so that the behavior logic can be tested without a real document.
//!
//! The browser binding lives in the `pagelet-dom` crate.
//!
//! Two behaviors are provided:
//!
//! * the select enhancer, which upgrades every matching `<select>` on a page
//!   with a searchable dropdown widget;
//! * the wildcard sync, which keeps a wildcards text field in step with the
//!   selected language on the system test page.
//!
//! Every DOM-facing concern sits behind a trait:
//! element discovery behind [`SelectQuery`],
//! the dropdown widget behind [`DropdownWidget`],
//! and the two form fields behind [`LanguageForm`].

#![warn(missing_docs)]

pub mod error;
pub mod page;
pub mod enhance;
pub mod form;
pub mod wildcards;
pub mod sync;

pub use error::Error;

/// The types that should usually be imported.
pub mod prelude {
    pub use crate::enhance::{enhance_selects, DropdownWidget, SelectQuery};
    pub use crate::form::{ChangeSubscription, LanguageForm};
    pub use crate::page::{mount_all, AutoloadPage, NamedPage, PageContext, PageEntry};
    pub use crate::sync::{bind_wildcard_sync, sync_wildcards};
    pub use crate::wildcards::{WildcardTable, LANG_WILDCARDS};
}
