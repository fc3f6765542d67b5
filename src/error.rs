//! Error types for ak.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AkError>;

#[derive(Debug, Error)]
pub enum AkError {
    /// The bundled asset directory is absent. This means the ak
    /// installation itself is corrupted or incomplete; never retried.
    #[error("source assets not found at {}", .0.display())]
    MissingAssets(PathBuf),

    /// Environment or path derivation failure.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem failure during the copy. Propagates through the
    /// recursion untouched and is handled once at the process boundary.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
