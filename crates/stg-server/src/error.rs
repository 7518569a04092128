use stg_scan::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("receive failed: {0}")]
    Receive(#[from] std::io::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
