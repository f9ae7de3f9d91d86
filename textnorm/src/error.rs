//! Error type shared by every fallible entry point of the crate.
//!
//! The string transforms themselves are total over `&str`; errors only arise at
//! the edges: raw bytes coming in, percent escapes inside paths, and config.

use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

use crate::config::Strategy;

/// Reasons a normalization request can fail.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid UTF-8 in {context}: {source}")]
    Encoding {
        context: &'static str,
        #[source]
        source: Utf8Error,
    },
    #[error("invalid separator '{0}': use one or more of the characters {allowed}", allowed = crate::slug::SEPARATOR_CHARS)]
    InvalidSeparator(String),
    #[error("transliteration strategy '{0}' is not compiled into this build")]
    StrategyUnavailable(Strategy),
    #[error("malformed normalizer config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unable to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
