// SPDX-License-Identifier: MIT OR Apache-2.0

//! The script cursor.
//!
//! A `ScriptCursor` is a forward-only view over one key's multi-line script
//! block, consumed line by line and token by token. Cursors own a copy of
//! the block, so each call to
//! [`open_script`](crate::service::ConfigReader::open_script) yields an
//! independent cursor; a cursor is single-owner state and is not restartable.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::scoped_key::ScopedKey;
use crate::domain::token::Token;
use crate::parser::lexer::tokenize;

/// A stateful line/token cursor over a script block.
///
/// The cursor starts positioned before the first line; callers must invoke
/// [`next_line`](ScriptCursor::next_line) before consuming tokens. Tokens on
/// a line follow the same lexing rules as value expressions, so quoting and
/// comma separation behave identically.
///
/// # Examples
///
/// ```
/// use specfile::store::ConfigStore;
///
/// let store = ConfigStore::parse("ports =\nttyS0 115200\nttyS1 9600\n");
/// let reader = store.reader();
/// let mut cursor = reader.open_script("ports").unwrap();
///
/// while cursor.next_line() {
///     let device = cursor.next_token().unwrap();
///     let speed = cursor.next_int().unwrap();
///     println!("device = {}, speed = {}", device, speed);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ScriptCursor {
    key: ScopedKey,
    lines: Vec<String>,
    /// Index of the next line to read; the current line is `next_line - 1`.
    next_line: usize,
    tokens: Vec<Token>,
    cursor: usize,
}

impl ScriptCursor {
    pub(crate) fn new(key: ScopedKey, lines: Vec<String>) -> Self {
        ScriptCursor {
            key,
            lines,
            next_line: 0,
            tokens: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns the scoped key this script belongs to.
    pub fn key(&self) -> &ScopedKey {
        &self.key
    }

    /// Returns the 1-based number of the current line, or 0 before the
    /// first [`next_line`](ScriptCursor::next_line) call.
    pub fn line_number(&self) -> usize {
        self.next_line
    }

    /// Advances to the next line of the block and resets the token position
    /// to the start of that line.
    ///
    /// Returns false once the block is exhausted; the cursor then stays
    /// terminal.
    pub fn next_line(&mut self) -> bool {
        match self.lines.get(self.next_line) {
            Some(line) => {
                self.tokens = tokenize(line);
                self.next_line += 1;
                self.cursor = 0;
                true
            }
            None => {
                self.tokens.clear();
                self.cursor = 0;
                false
            }
        }
    }

    /// Returns the next token on the current line.
    ///
    /// Fails with [`EndOfLine`](ConfigError::EndOfLine) when the current
    /// line has no more tokens, or when no line has been entered yet.
    pub fn next_token(&mut self) -> Result<String> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.as_string())
            }
            None => Err(ConfigError::EndOfLine {
                key: self.key.as_str().to_string(),
                line: self.next_line,
            }),
        }
    }

    /// Returns the next token on the current line converted to an integer.
    ///
    /// Accepts optional sign and base-10 or `0x`-prefixed hex digits. The
    /// token is consumed only on success, so a failed conversion leaves the
    /// cursor position untouched.
    pub fn next_int(&mut self) -> Result<i64> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                let value = token.as_i64(self.key.as_str())?;
                self.cursor += 1;
                Ok(value)
            }
            None => Err(ConfigError::EndOfLine {
                key: self.key.as_str().to_string(),
                line: self.next_line,
            }),
        }
    }
}
