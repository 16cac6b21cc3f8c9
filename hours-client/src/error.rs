use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with an `error` field; the message is shown as is.
    #[error("{0}")]
    Rejected(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Parsing(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The server-provided message, if the failure came with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
