use thiserror::Error;

/// Failure reported by an external collaborator (discovery, content,
/// transform or delivery client).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Failed to reach remote service: {0}")]
    Transport(String),

    #[error("Remote service rejected credentials: {0}")]
    Auth(String),

    #[error("Remote service quota exhausted: {0}")]
    Quota(String),

    #[error("Remote service rate limit hit: {0}")]
    RateLimit(String),

    #[error("Unexpected response from remote service: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        // Telegram puts the bot token in the request path.
        ClientError::Transport(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::InvalidResponse(error.to_string())
    }
}

/// Why a single item did not make it to the destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemFailure {
    #[error("content unavailable")]
    ContentUnavailable,

    #[error("content fetch failed: {0}")]
    ContentFetch(ClientError),

    #[error("summarization failed: {0}")]
    Transform(ClientError),

    #[error("delivery failed: {0}")]
    Delivery(ClientError),
}

/// Reasons a run refuses to start. None of these change the run state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("No channel IDs provided")]
    NoSources,

    #[error("A run is already in progress")]
    AlreadyRunning,
}
