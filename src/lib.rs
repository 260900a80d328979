// SPDX-License-Identifier: MIT OR Apache-2.0

//! A section-scoped settings-file parser with a typed accessor protocol.
//!
//! This crate reads a human-edited settings file into a scoped, typed
//! key/value store and converts raw tokens into caller-specified types at
//! access time, raising a typed error on any mismatch.
//!
//! # Architecture
//!
//! The crate is organized in layers:
//!
//! - **Domain Layer**: Core types (`ScopedKey`, `Token`, `Value`, errors)
//! - **Ports**: Conversion trait seams (`FromToken`, `FromTokens`)
//! - **Parser**: The line normalizer and the lenient token lexer
//! - **Store**: `ConfigStore`, the whole-file load pass and entry mapping
//! - **Service**: `ConfigReader` (the typed accessor) and `ScriptCursor`
//!
//! # File format
//!
//! ```text
//! # comments start with '#' or '//'
//! [section]
//! key = token, "quoted token", 'another'
//! bare_key
//! script =
//! ttyS0 115200
//! ttyS1 9600
//! ```
//!
//! `[section]` headers scope the keys that follow; the stored identity of a
//! key is `section::name`, with the empty section as the default scope. A
//! key written as `key =` with nothing after the equals sign opens a
//! multi-line script block, read back through a stateful cursor.
//!
//! # Quick Start
//!
//! ```rust
//! use specfile::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::parse("[net]\nport = 8080\nhosts = a, b, c\n");
//! let mut reader = store.reader();
//! reader.set_current_section("net");
//!
//! let port: u32 = reader.get("port")?;
//! let hosts: Vec<String> = reader.get("hosts")?;
//! assert_eq!(port, 8080);
//! assert_eq!(hosts.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! A `ConfigStore` is immutable once loaded and safe to share across
//! threads. `ConfigReader` and `ScriptCursor` carry accessor-local mutable
//! state (the current section, the cursor position) and are single-owner;
//! create one per thread instead of sharing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod parser;
pub mod ports;
pub mod service;
pub mod store;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, FormatSpec, Result, ScopedKey, Token, Value, ValueType};
    pub use crate::ports::{FromToken, FromTokens};
    pub use crate::service::{ConfigReader, ScriptCursor};
    pub use crate::store::{ConfigStore, Entry};
}
