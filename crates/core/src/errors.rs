use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookError {
    /// Build an error from a non-success HTTP status and its body text.
    ///
    /// 401 and 404 get their own variants so callers can tell an expired
    /// session or a vanished provider apart from other failures.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => BookError::Authentication(message),
            404 => BookError::NotFound(message),
            _ => BookError::Api { status, message },
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;
