//! Error types for the Zenith launcher.

use std::io;

/// Errors produced by the Zenith launcher.
#[derive(Debug, thiserror::Error)]
pub enum ZenithError {
    /// Invalid launcher configuration or an unknown name in it.
    #[error("bad config: {0}")]
    Config(String),

    /// The native bridge failed or refused a request.
    #[error("native bridge: {0}")]
    Platform(String),

    /// The recommendation service failed.
    #[error("recommendations unavailable: {0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ZenithError>;
