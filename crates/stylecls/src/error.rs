//! Error types for building, resolving and configuration loading.
//!
//! Resolution has a single failure mode, [`UnresolvedTokenError`], which aborts
//! the whole resolve or rewrite call. Building a table can fail with a
//! [`BuildError`], and reading a configuration with a [`ConfigError`].

use std::path::PathBuf;

use thiserror::Error;

/// A class token matched neither the style table nor any dynamic family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("style '{token}' not found")]
pub struct UnresolvedTokenError {
    /// The normalized token that failed to resolve.
    pub token: String,
}

impl UnresolvedTokenError {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Errors raised while compiling a configuration into a style table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A shortcut body names a token that cannot be resolved.
    #[error("shortcut '{shortcut}' references unknown style '{token}'")]
    MissingShortcutReference { shortcut: String, token: String },

    /// A scale progression produces unusable values.
    #[error("invalid {family} scale: {message}")]
    InvalidScale {
        family: &'static str,
        message: String,
    },
}

/// Errors raised while reading a [`StyleConfig`](crate::StyleConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// YAML or JSON parse error.
    #[error("failed to parse style config{}: {message}", display_path(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// The file could not be read.
    #[error("failed to load style config: {message}")]
    Load { message: String },

    /// The file extension is not one of [`CONFIG_EXTENSIONS`](crate::config::CONFIG_EXTENSIONS).
    #[error("unsupported style config extension: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
