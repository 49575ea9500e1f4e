//! Error types for the service layer.

/// Errors produced by the storage-backed services. Reads never fail (missing
/// or undecodable values read as `None`); writes can.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// JSON serialization of a stored value failed.
    #[error("serialization failed")]
    Serialization(#[from] serde_json::Error),
    /// Reading or writing the backing store failed.
    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),
}
