//! The form accessor seam.
//!
//! The language and wildcards fields live in the rendered document.
//! The sync logic only ever reads the one and writes the other,
//! so the whole document boundary is this trait plus a change subscription.

/// Accessor for the language / wildcards field pair of a form.
pub trait LanguageForm {
    /// The currently selected language identifier.
    ///
    /// `None` when the field carries no value at all;
    /// treated the same as an unrecognized language.
    fn language(&self) -> Option<String>;

    /// Overwrite the wildcards field value.
    fn set_wildcards(&self, value: &str);

    /// Call `handler` every time the language field value changes.
    ///
    /// The listener stays attached for as long as the returned subscription
    /// is kept alive.
    fn on_language_change(&self, handler: Box<dyn 'static + Fn()>) -> ChangeSubscription;
}

/// An attached change listener.
///
/// Dropping the subscription detaches the listener.
pub struct ChangeSubscription {
    detach: Option<Box<dyn 'static + FnOnce()>>,
}

impl ChangeSubscription {
    /// Wrap the backend detach action.
    pub fn new(detach: impl 'static + FnOnce()) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detach the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    /// Keep the listener attached for the rest of the page lifetime.
    ///
    /// The backend resources held by the subscription are leaked.
    pub fn forever(self) {
        std::mem::forget(self);
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
