use thiserror::Error;

/// Errors raised around the verification core: argument parsing, claim
/// validation, configuration and registration-log I/O.
///
/// Extraction and matching never produce one of these; a field that cannot
/// be found is simply absent.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Registration log error: {0}")]
    Storage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
