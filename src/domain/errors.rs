// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the settings-file crate.
//!
//! This module defines the error types that can occur when loading a settings
//! file or converting its tokens into typed values. All errors use `thiserror`
//! for proper error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for settings-file operations.
///
/// This enum represents all possible errors that can occur when loading,
/// resolving, or converting configuration entries. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use specfile::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "network::port".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The settings file could not be opened or read.
    #[error("failed to read settings file '{}': {source}", path.display())]
    File {
        /// The path that could not be read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The requested scoped key has no entry in the store.
    #[error("configuration key not found: {key}")]
    KeyNotFound {
        /// The fully scoped key that was not found
        key: String,
    },

    /// The entry's token count does not match the number of requested outputs.
    #[error("key '{key}' has {found} token(s) but {expected} output(s) were requested")]
    ArityMismatch {
        /// The fully scoped key being read
        key: String,
        /// The number of outputs the caller asked for
        expected: usize,
        /// The number of tokens the entry actually holds
        found: usize,
    },

    /// A token's text could not be converted to the requested type.
    #[error("cannot convert token '{token}' for key '{key}' to {target}")]
    TypeConversion {
        /// The fully scoped key being read
        key: String,
        /// The offending token text
        token: String,
        /// The target type name
        target: &'static str,
        /// The underlying conversion error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A format spec string contained a code outside `i`, `f`, `s`, `b`.
    ///
    /// This is a caller programming error and is surfaced immediately, before
    /// any token is examined.
    #[error("invalid format code '{code}' in format spec \"{spec}\"")]
    InvalidFormat {
        /// The full format spec string as passed by the caller
        spec: String,
        /// The first unrecognized code character
        code: char,
    },

    /// A script cursor ran out of tokens on its current line.
    #[error("no tokens left on line {line} of script '{key}'")]
    EndOfLine {
        /// The fully scoped key the script belongs to
        key: String,
        /// The 1-based line number within the script block
        line: usize,
    },
}

// Constructors for TypeConversion that carry the underlying parse error.
impl ConfigError {
    /// Creates a TypeConversion error from a ParseIntError.
    pub fn from_parse_int_error(key: &str, token: &str, err: ParseIntError) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            token: token.to_string(),
            target: "integer",
            source: Some(Box::new(err)),
        }
    }

    /// Creates a TypeConversion error from a ParseFloatError.
    pub fn from_parse_float_error(key: &str, token: &str, err: ParseFloatError) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            token: token.to_string(),
            target: "float",
            source: Some(Box::new(err)),
        }
    }

    /// Creates a TypeConversion error for a token outside the boolean vocabulary.
    pub fn bad_bool(key: &str, token: &str) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            token: token.to_string(),
            target: "boolean",
            source: None,
        }
    }
}

/// A specialized Result type for settings-file operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
