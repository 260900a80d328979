// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store layer containing the whole-file load pass.
//!
//! This module contains `ConfigStore`, which owns the scoped key to
//! token-list mapping built from one settings file, and `Entry`, the stored
//! value for a single key.

pub mod config_store;

// Re-export commonly used types
pub use config_store::{ConfigStore, Entry};
