use thiserror::Error;

pub type Result<T> = std::result::Result<T, SweepError>;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("unsupported action: {0}")]
    UnsupportedAction(String),

    /// Error reply surfaced by a bridge action; already human-readable.
    #[error("{0}")]
    Action(String),
}
