use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the URL store.
///
/// All variants are recoverable and returned to the immediate caller;
/// none is fatal to the process. A rejected operation never partially
/// applies its effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("alias already exists: {0}")]
    AliasTaken(String),
    #[error("short url not found: {0}")]
    NotFound(String),
    #[error("short url expired: {0}")]
    Expired(String),
    #[error("invalid short key: {0}")]
    InvalidKey(String),
}
