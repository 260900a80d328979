// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed accessor.
//!
//! `ConfigReader` is a read-only view over a [`ConfigStore`] that resolves
//! unscoped key names against a caller-chosen current section and converts
//! an entry's tokens into the types the call site asks for. It never mutates
//! the store; its only mutable state is the current section string.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::format::{FormatSpec, Value};
use crate::domain::scoped_key::ScopedKey;
use crate::ports::convert::FromTokens;
use crate::service::script::ScriptCursor;
use crate::store::config_store::{ConfigStore, Entry};

/// A typed accessor carrying the current section.
///
/// The current section starts empty (the default scope for keys appearing
/// before any `[section]` header) and persists across calls until changed.
/// Readers are cheap to create; use one per thread rather than sharing.
///
/// # Examples
///
/// ```
/// use specfile::store::ConfigStore;
///
/// let store = ConfigStore::parse("[alpha]\nrange = -5, 5\nflag = yes\n");
/// let mut reader = store.reader();
/// reader.set_current_section("alpha");
///
/// let (lo, hi): (i32, i32) = reader.get("range").unwrap();
/// assert_eq!((lo, hi), (-5, 5));
///
/// let flag: bool = reader.get("flag").unwrap();
/// assert!(flag);
/// ```
#[derive(Clone, Debug)]
pub struct ConfigReader<'a> {
    store: &'a ConfigStore,
    section: String,
}

impl<'a> ConfigReader<'a> {
    /// Creates a reader over `store`, starting in the default (empty)
    /// section.
    pub fn new(store: &'a ConfigStore) -> Self {
        ConfigReader {
            store,
            section: String::new(),
        }
    }

    /// Sets the section used to resolve unscoped key names.
    ///
    /// Always succeeds; the section does not need to exist in the file.
    pub fn set_current_section(&mut self, name: impl Into<String>) {
        self.section = name.into();
    }

    /// Returns the current section name.
    pub fn current_section(&self) -> &str {
        &self.section
    }

    /// Resolves a base key name against the current section.
    pub fn resolve(&self, base_name: &str) -> ScopedKey {
        ScopedKey::scoped(&self.section, base_name)
    }

    fn lookup(&self, base_name: &str) -> Result<(ScopedKey, &'a Entry)> {
        let key = self.resolve(base_name);
        match self.store.entry(&key) {
            Some(entry) => Ok((key, entry)),
            None => Err(ConfigError::KeyNotFound {
                key: key.into_string(),
            }),
        }
    }

    /// Reads a key's tokens into the requested type.
    ///
    /// The expected arity comes from the static type of `T`:
    ///
    /// - a scalar (`i32`, `i64`, `u32`, `u64`, `f64`, `bool`, `String`)
    ///   requires exactly one token;
    /// - a tuple requires exactly one token per element;
    /// - a `Vec<T>` consumes all tokens, however many there are.
    ///
    /// Fails with [`KeyNotFound`](ConfigError::KeyNotFound) when the scoped
    /// key has no entry, [`ArityMismatch`](ConfigError::ArityMismatch) when
    /// the token count differs from the expectation, and
    /// [`TypeConversion`](ConfigError::TypeConversion) when a token cannot
    /// be converted. On failure nothing is returned, so caller state is
    /// never partially filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::store::ConfigStore;
    ///
    /// let store = ConfigStore::parse("ints = 1, 2, 3\n");
    /// let reader = store.reader();
    /// let all: Vec<i32> = reader.get("ints").unwrap();
    /// assert_eq!(all, vec![1, 2, 3]);
    /// ```
    pub fn get<T: FromTokens>(&self, base_name: &str) -> Result<T> {
        let (key, entry) = self.lookup(base_name)?;
        T::from_tokens(key.as_str(), entry.tokens())
    }

    /// Reads a key's tokens through an explicit format spec.
    ///
    /// `spec` is a string of type codes, one per token: `i` (integer), `f`
    /// (float), `s` (string), `b` (boolean). An unrecognized code is a
    /// caller programming error and fails immediately with
    /// [`InvalidFormat`](ConfigError::InvalidFormat), before the key is even
    /// resolved. The token count must equal the code count exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::Value;
    /// use specfile::store::ConfigStore;
    ///
    /// let store = ConfigStore::parse("multi = 7, 3.5, \"hi\", true\n");
    /// let reader = store.reader();
    /// let values = reader.get_fmt("multi", "ifsb").unwrap();
    /// assert_eq!(values[0], Value::Int(7));
    /// assert_eq!(values[3], Value::Bool(true));
    /// ```
    pub fn get_fmt(&self, base_name: &str, spec: &str) -> Result<Vec<Value>> {
        let format: FormatSpec = spec.parse()?;
        let (key, entry) = self.lookup(base_name)?;
        let tokens = entry.tokens();
        if tokens.len() != format.len() {
            return Err(ConfigError::ArityMismatch {
                key: key.into_string(),
                expected: format.len(),
                found: tokens.len(),
            });
        }
        format
            .types()
            .iter()
            .zip(tokens)
            .map(|(ty, token)| ty.convert(key.as_str(), token))
            .collect()
    }

    /// Opens a cursor over a key's script block.
    ///
    /// Fails with [`KeyNotFound`](ConfigError::KeyNotFound) when the scoped
    /// key has no entry. A key without a block yields a cursor whose first
    /// [`next_line`](ScriptCursor::next_line) returns false.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::store::ConfigStore;
    ///
    /// let store = ConfigStore::parse("ports =\nttyS0 115200\n");
    /// let reader = store.reader();
    /// let mut cursor = reader.open_script("ports").unwrap();
    /// assert!(cursor.next_line());
    /// assert_eq!(cursor.next_token().unwrap(), "ttyS0");
    /// assert_eq!(cursor.next_int().unwrap(), 115200);
    /// ```
    pub fn open_script(&self, base_name: &str) -> Result<ScriptCursor> {
        let (key, entry) = self.lookup(base_name)?;
        Ok(ScriptCursor::new(key, entry.script().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::Value;

    fn store() -> ConfigStore {
        ConfigStore::parse(
            "\
voltage_range = -12, 12
pi = 3.14159
filename = \"data file.txt\"
flag = true
int_list = 1, 2, 3, 4
complex = widget, 3.125, no, 0x10
empty_key
[alpha]
x = 1
[bravo]
x = 2
",
        )
    }

    #[test]
    fn test_get_scalar() {
        let store = store();
        let reader = store.reader();
        let pi: f64 = reader.get("pi").unwrap();
        assert_eq!(pi, 3.14159);
    }

    #[test]
    fn test_get_string_with_spaces() {
        let store = store();
        let reader = store.reader();
        let name: String = reader.get("filename").unwrap();
        assert_eq!(name, "data file.txt");
    }

    #[test]
    fn test_get_bool() {
        let store = store();
        let reader = store.reader();
        let flag: bool = reader.get("flag").unwrap();
        assert!(flag);
    }

    #[test]
    fn test_get_tuple() {
        let store = store();
        let reader = store.reader();
        let (lo, hi): (i32, i32) = reader.get("voltage_range").unwrap();
        assert_eq!((lo, hi), (-12, 12));
    }

    #[test]
    fn test_get_vec_consumes_all() {
        let store = store();
        let reader = store.reader();
        let list: Vec<i32> = reader.get("int_list").unwrap();
        assert_eq!(list, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get_missing_key() {
        let store = store();
        let reader = store.reader();
        let result: Result<i32> = reader.get("nonexistent");
        assert!(matches!(result, Err(ConfigError::KeyNotFound { .. })));
    }

    #[test]
    fn test_get_empty_token_list_is_arity_mismatch() {
        let store = store();
        let reader = store.reader();
        let result: Result<bool> = reader.get("empty_key");
        assert!(matches!(
            result,
            Err(ConfigError::ArityMismatch {
                expected: 1,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_section_switching() {
        let store = store();
        let mut reader = store.reader();

        reader.set_current_section("alpha");
        let x: i32 = reader.get("x").unwrap();
        assert_eq!(x, 1);

        reader.set_current_section("bravo");
        let x: i32 = reader.get("x").unwrap();
        assert_eq!(x, 2);
    }

    #[test]
    fn test_default_section_is_empty() {
        let store = store();
        let reader = store.reader();
        assert_eq!(reader.current_section(), "");
        assert!(reader.get::<f64>("pi").is_ok());
    }

    #[test]
    fn test_section_does_not_leak_into_default_scope() {
        let store = store();
        let mut reader = store.reader();
        reader.set_current_section("alpha");
        // 'pi' lives in the default scope, not in [alpha].
        assert!(matches!(
            reader.get::<f64>("pi"),
            Err(ConfigError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_get_fmt_mixed_types() {
        let store = store();
        let reader = store.reader();
        let values = reader.get_fmt("complex", "sfbi").unwrap();
        assert_eq!(values[0], Value::Str("widget".to_string()));
        assert_eq!(values[1], Value::Float(3.125));
        assert_eq!(values[2], Value::Bool(false));
        assert_eq!(values[3], Value::Int(16));
    }

    #[test]
    fn test_get_fmt_wrong_arity() {
        let store = store();
        let reader = store.reader();
        let result = reader.get_fmt("complex", "sf");
        assert!(matches!(
            result,
            Err(ConfigError::ArityMismatch {
                expected: 2,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_get_fmt_wrong_type() {
        let store = store();
        let reader = store.reader();
        // 'widget' cannot convert to an integer.
        let result = reader.get_fmt("complex", "ifbi");
        assert!(matches!(result, Err(ConfigError::TypeConversion { .. })));
    }

    #[test]
    fn test_get_fmt_invalid_code_fails_fast() {
        let store = store();
        let reader = store.reader();
        // The bad spec is reported even though the key does not exist.
        let result = reader.get_fmt("nonexistent", "iz");
        assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    }

    #[test]
    fn test_resolve_builds_scoped_identity() {
        let store = store();
        let mut reader = store.reader();
        reader.set_current_section("alpha");
        assert_eq!(reader.resolve("x").as_str(), "alpha::x");
    }

    #[test]
    fn test_open_script_missing_key() {
        let store = store();
        let reader = store.reader();
        assert!(matches!(
            reader.open_script("nonexistent"),
            Err(ConfigError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_open_script_plain_key_yields_empty_cursor() {
        let store = store();
        let reader = store.reader();
        let mut cursor = reader.open_script("pi").unwrap();
        assert!(!cursor.next_line());
    }
}
