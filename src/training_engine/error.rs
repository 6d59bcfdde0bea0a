use thiserror::Error;

/// Failures at the crate's edges: decoding external data and talking to the
/// persistence service. The decision engine itself never fails.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// JSON strategy data, configuration or a persisted value failed to decode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown training mode: '{0}'")]
    UnknownMode(String),
    #[error("invalid hand code: '{0}'")]
    InvalidHandCode(String),
    #[error("hand holds {0} twice")]
    DuplicateCard(String),
    /// The key/value store refused a write.
    #[error("storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },
}
