// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait seams between the store's raw token lists
//! and the typed values the accessor hands to callers. New output types can
//! be supported by implementing these traits.

pub mod convert;

// Re-export commonly used types
pub use convert::{FromToken, FromTokens};
