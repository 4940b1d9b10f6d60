//! Error types for chapbook operations.

use thiserror::Error;

/// Errors that can occur while configuring or running a conversion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("heading pattern `{0}` has no `title` capture group")]
    MissingTitleGroup(String),

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
