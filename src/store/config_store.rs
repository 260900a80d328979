// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration store.
//!
//! `ConfigStore` reads a whole settings file in one pass, maintains the
//! current writing section, and builds the scoped key to token-list mapping.
//! Once built, a store is immutable and may be shared freely across threads;
//! all mutation (the current section, script cursors) lives in the
//! [`service`](crate::service) layer.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::scoped_key::ScopedKey;
use crate::domain::token::Token;
use crate::parser::lexer::{parse_to_delimiter, tokenize};
use crate::parser::line::{classify, normalize, Line};
use crate::service::reader::ConfigReader;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One stored configuration entry: an ordered token list plus the raw lines
/// of the entry's script block, if the key opened one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    tokens: Vec<Token>,
    script: Vec<String>,
}

impl Entry {
    /// Returns the entry's tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the entry's script block lines (empty for plain entries).
    pub fn script(&self) -> &[String] {
        &self.script
    }

    /// Returns true when the entry carries at least one script line.
    pub fn has_script(&self) -> bool {
        !self.script.is_empty()
    }
}

/// An immutable mapping from scoped keys to entries, built by one full-file
/// read.
///
/// The file format:
///
/// - `# ...` or `// ...` after optional leading spaces is a whole-line
///   comment; tabs are soft separators.
/// - `[section]` opens a new scope for the keys that follow.
/// - `key = token[, token...]` associates tokens with `key` under the open
///   scope. Tokens may be bare words, comma-joined, or single/double-quoted.
/// - A key with no `=` is legal and yields an empty token list.
/// - Re-declaring a scoped key later in the file overwrites the earlier
///   entry (last-write-wins; no duplicate-key error).
///
/// # Script blocks
///
/// A key line written as `key =` with nothing after the `=` opens a script
/// block. The content lines that follow it, as long as they contain no `=`,
/// are captured as the block's lines rather than being entered as keys. The
/// block ends at the first blank line, section header, line containing `=`,
/// or end of file. Comment lines inside a block are skipped and do not
/// terminate it. Blocks are read back through
/// [`ScriptCursor`](crate::service::ScriptCursor).
///
/// # Examples
///
/// ```
/// use specfile::store::ConfigStore;
///
/// let store = ConfigStore::parse("[alpha]\nx = 1\n[bravo]\nx = 2\n");
/// let mut reader = store.reader();
/// reader.set_current_section("bravo");
/// let x: i32 = reader.get("x").unwrap();
/// assert_eq!(x, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    entries: HashMap<ScopedKey, Entry>,
}

impl ConfigStore {
    /// Reads the settings file at `path` and builds the store.
    ///
    /// A missing or unreadable file is reported as [`ConfigError::File`];
    /// the caller decides whether to continue. Parsing itself never fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use specfile::store::ConfigStore;
    ///
    /// let store = ConfigStore::load("/etc/myapp/settings.cfg").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&content);
        tracing::debug!(
            path = %path.display(),
            entries = store.entries.len(),
            "loaded settings file"
        );
        Ok(store)
    }

    /// Reads `<app_name>.cfg` from the OS-appropriate configuration
    /// directory for the application.
    ///
    /// This method uses the `directories` crate to determine the
    /// configuration directory for the current operating system.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use specfile::store::ConfigStore;
    ///
    /// let store = ConfigStore::load_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn load_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::File {
                path: PathBuf::from(app_name),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine a configuration directory",
                ),
            })?;
        Self::load(proj_dirs.config_dir().join(format!("{}.cfg", app_name)))
    }

    /// Builds a store from already-read file text.
    ///
    /// The lexer is lenient, so this never fails: malformed lines degrade to
    /// fewer tokens or empty entries.
    pub fn parse(content: &str) -> Self {
        let mut entries: HashMap<ScopedKey, Entry> = HashMap::new();
        // The writing section, used only during this load pass.
        let mut section = String::new();
        // The key currently collecting script lines, if any.
        let mut open_block: Option<ScopedKey> = None;

        for raw in content.lines() {
            let line = normalize(raw);
            match classify(&line) {
                Line::Blank => open_block = None,
                Line::Comment => {}
                Line::Section(name) => {
                    open_block = None;
                    section = name;
                }
                Line::Content(text) => {
                    if let Some(block_key) = &open_block {
                        if !text.contains('=') {
                            if let Some(entry) = entries.get_mut(block_key) {
                                entry.script.push(line.clone());
                            }
                            continue;
                        }
                        // A new key line ends the block.
                        open_block = None;
                    }

                    let base_name = parse_to_delimiter(text, '=');
                    let key = ScopedKey::scoped(&section, &base_name);
                    let (tokens, opens_block) = match text.split_once('=') {
                        Some((_, rest)) => {
                            let tokens = tokenize(rest);
                            let opens_block = tokens.is_empty();
                            (tokens, opens_block)
                        }
                        None => (Vec::new(), false),
                    };
                    entries.insert(
                        key.clone(),
                        Entry {
                            tokens,
                            script: Vec::new(),
                        },
                    );
                    open_block = opens_block.then_some(key);
                }
            }
        }

        ConfigStore { entries }
    }

    /// Returns the entry for a fully scoped key, if present.
    pub fn entry(&self, key: &ScopedKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Returns the token list for a fully scoped key, if present.
    pub fn tokens(&self, key: &ScopedKey) -> Option<&[Token]> {
        self.entries.get(key).map(|e| e.tokens())
    }

    /// Returns the script block lines for a fully scoped key, if present.
    pub fn script(&self, key: &ScopedKey) -> Option<&[String]> {
        self.entries.get(key).map(|e| e.script())
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enumerates every (key, tokens) pair in whatever order the underlying
    /// mapping iterates.
    ///
    /// This is a diagnostic surface for testing and observability only; the
    /// order is not guaranteed to match file order.
    pub fn dump(&self) -> impl Iterator<Item = (&ScopedKey, &[Token])> {
        self.entries.iter().map(|(k, e)| (k, e.tokens()))
    }

    /// Creates a typed accessor over this store, starting in the default
    /// (empty) section.
    pub fn reader(&self) -> ConfigReader<'_> {
        ConfigReader::new(self)
    }
}
