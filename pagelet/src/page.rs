//! The page registration model.
//!
//! The host page loader decides *when* a page is displayed;
//! this module only describes *what* should run on it.
//! A behavior is registered as an [`AutoloadPage`] (runs on every page)
//! or a [`NamedPage`] (runs only on the page with a matching name),
//! and the loader hands each registration the current [`PageContext`] once.

use std::cell::Cell;

/// The loader-provided description of the currently displayed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    name: String,
}

impl PageContext {
    /// Create a context for the page with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name of the currently displayed page.
    ///
    /// Empty when the document does not carry a page name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

type PageCallback = Box<dyn 'static + Fn(&PageContext)>;

/// A page registration that the loader can mount.
pub trait PageEntry {
    /// The registration name, used by the loader for bookkeeping.
    fn name(&self) -> &str;

    /// Whether this registration applies to the given page.
    fn matches(&self, ctx: &PageContext) -> bool;

    /// Run the callback if the registration applies and has not run yet.
    ///
    /// Returns whether the callback has been invoked.
    /// A registration runs at most once per page load,
    /// so a second `mount` on the same value is a no-op.
    fn mount(&self, ctx: &PageContext) -> bool;
}

/// A behavior that runs on every page.
pub struct AutoloadPage {
    name: &'static str,
    mounted: Cell<bool>,
    callback: PageCallback,
}

impl AutoloadPage {
    /// Register a callback to run on every page.
    pub fn new(name: &'static str, callback: impl 'static + Fn(&PageContext)) -> Self {
        Self {
            name,
            mounted: Cell::new(false),
            callback: Box::new(callback),
        }
    }
}

impl PageEntry for AutoloadPage {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, _ctx: &PageContext) -> bool {
        true
    }

    fn mount(&self, ctx: &PageContext) -> bool {
        if self.mounted.replace(true) {
            return false;
        }
        (self.callback)(ctx);
        true
    }
}

/// A behavior that runs only on the page with a matching name.
pub struct NamedPage {
    page_name: &'static str,
    mounted: Cell<bool>,
    callback: PageCallback,
}

impl NamedPage {
    /// Register a callback to run on the page named `page_name`.
    pub fn new(page_name: &'static str, callback: impl 'static + Fn(&PageContext)) -> Self {
        Self {
            page_name,
            mounted: Cell::new(false),
            callback: Box::new(callback),
        }
    }
}

impl PageEntry for NamedPage {
    fn name(&self) -> &str {
        self.page_name
    }

    fn matches(&self, ctx: &PageContext) -> bool {
        ctx.name() == self.page_name
    }

    fn mount(&self, ctx: &PageContext) -> bool {
        if !self.matches(ctx) {
            return false;
        }
        if self.mounted.replace(true) {
            return false;
        }
        (self.callback)(ctx);
        true
    }
}

/// Mount every registration that applies to the given page.
///
/// Returns the number of callbacks invoked.
pub fn mount_all<'a>(
    pages: impl IntoIterator<Item = &'a dyn PageEntry>,
    ctx: &PageContext,
) -> usize {
    let mut mounted = 0;
    for page in pages {
        if page.mount(ctx) {
            log::debug!("Mounted page behavior {:?}", page.name());
            mounted += 1;
        }
    }
    mounted
}
