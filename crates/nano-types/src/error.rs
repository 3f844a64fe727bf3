//! Error types for NanoBrowser.

use std::io;

/// Errors produced by the NanoBrowser crates.
///
/// Navigation variants are recoverable: the failing operation leaves the
/// controller untouched and the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("could not load {input}: {reason}")]
    InvalidLocation { input: String, reason: String },

    #[error("no previous page in history")]
    NoPreviousEntry,

    #[error("no next page in history")]
    NoNextEntry,

    #[error("no home page has been set")]
    NoHomeSet,

    #[error("no page is currently displayed")]
    NoCurrentLocation,

    #[error("unknown favorite: {0:?}")]
    UnknownFavorite(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl BrowserError {
    /// Build an [`BrowserError::InvalidLocation`] from the rejected input.
    pub fn invalid_location(input: &str, reason: impl ToString) -> Self {
        Self::InvalidLocation {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BrowserError>;
