//! Song Context - Errors

use thiserror::Error;

/// Song Context 领域错误
#[derive(Debug, Error)]
pub enum SongError {
    #[error("Invalid media file name: {0}")]
    InvalidFileName(String),

    #[error("Unsupported media format: {0}")]
    UnsupportedFormat(String),
}
