use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Failure talking to the remote document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("store answered {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StoreError {
    /// Whether the request never got an answer from the store.
    pub fn is_network(&self) -> bool {
        matches!(self, StoreError::Network(_))
    }
}
