use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Local store error: {0}")]
    Db(String),
}

impl SourceError {
    /// Client errors won't go away by asking again.
    pub fn is_retryable(&self) -> bool {
        match self {
            SourceError::Network(_) => true,
            SourceError::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
