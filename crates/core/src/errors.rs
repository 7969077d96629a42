use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success response from the backend. `message` carries the `error`
    /// field of the response body when the backend supplied one.
    #[error("Backend returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Message provided by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            BookingError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
