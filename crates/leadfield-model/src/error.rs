use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Upstream fetch failed. The message is shown to the user verbatim in
    /// place of any field content.
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
