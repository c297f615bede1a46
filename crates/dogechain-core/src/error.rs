#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// DNS failure, refused connection, timeout, or an unreadable body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode JSON response: {message}; body={body}")]
    Decode { message: String, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// True for failures that happened before any HTTP status was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
