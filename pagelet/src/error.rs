//! The common error types.

/// The common error type.
#[derive(Debug)]
pub enum Error {
    /// A form field required by the page is not in the document.
    FieldNotFound {
        /// The `name` attribute of the missing field.
        field: &'static str,
    },
    /// The underlying backend failed.
    BackendError {
        /// The backend error message.
        msg: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::FieldNotFound { field } => {
                write!(f, "Cannot find the form field {:?}", field)?;
            }
            Error::BackendError { msg } => {
                write!(f, "{}", msg)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
