// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and business logic.
//!
//! This module contains the fundamental types used throughout the crate:
//! scoped keys, tokens, format specs, and the error taxonomy. It is
//! independent of any file or I/O concerns.

pub mod errors;
pub mod format;
pub mod scoped_key;
pub mod token;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use format::{FormatSpec, Value, ValueType};
pub use scoped_key::ScopedKey;
pub use token::Token;
