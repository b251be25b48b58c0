use uuid::Uuid;

/// Errors from session storage and (de)serialization.
///
/// Extraction and merging never fail; only the shared registry and the
/// JSON import/export surface do.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    SessionNotFound(Uuid),
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
