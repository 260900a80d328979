// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed accessor and the script cursor.
//!
//! This module contains the read-only views over a loaded store:
//! `ConfigReader`, which resolves keys against a current section and
//! performs typed conversion, and `ScriptCursor`, which walks a key's
//! multi-line script block.

pub mod reader;
pub mod script;

// Re-export commonly used types
pub use reader::ConfigReader;
pub use script::ScriptCursor;
