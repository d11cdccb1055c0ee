use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid domain")]
    InvalidDomain,

    #[error("connection failed: {0}")]
    Connect(#[source] std::io::Error),

    #[error("stream error: {0}")]
    Stream(#[source] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
