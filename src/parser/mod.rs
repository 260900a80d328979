// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser layer containing the line normalizer and the token lexer.
//!
//! These are the low-level text primitives the store's load pass is built
//! on. They carry no state and raise no errors; lenient lexing is part of
//! the file-format contract.

pub mod lexer;
pub mod line;

// Re-export commonly used items
pub use lexer::{parse_to_delimiter, tokenize};
pub use line::{classify, normalize, Line};
