// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped key newtype for type-safe key handling.
//!
//! This module provides the `ScopedKey` type, which wraps the stored identity
//! of a configuration entry: the section name and base key name joined by
//! `::`. Keys declared before any `[section]` header live in the empty
//! section, so their identity begins with `::`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for fully scoped configuration keys.
///
/// `ScopedKey` wraps a `String` of the form `<section>::<base-name>`. This is
/// the unique lookup identity in a [`ConfigStore`](crate::store::ConfigStore):
/// the same base name under two different sections yields two distinct keys.
/// Keys are case-sensitive.
///
/// # Examples
///
/// ```
/// use specfile::domain::scoped_key::ScopedKey;
///
/// let key = ScopedKey::scoped("alpha", "voltage");
/// assert_eq!(key.as_str(), "alpha::voltage");
/// assert_eq!(key.section(), "alpha");
/// assert_eq!(key.base_name(), "voltage");
///
/// // The default scope is the empty section.
/// let key = ScopedKey::scoped("", "voltage");
/// assert_eq!(key.as_str(), "::voltage");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopedKey(String);

impl ScopedKey {
    /// Creates a `ScopedKey` from an already-joined identity string.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::scoped_key::ScopedKey;
    ///
    /// let key = ScopedKey::new("alpha::voltage".to_string());
    /// assert_eq!(key.as_str(), "alpha::voltage");
    /// ```
    pub fn new(key: String) -> Self {
        ScopedKey(key)
    }

    /// Builds the scoped identity from a section name and a base key name.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::scoped_key::ScopedKey;
    ///
    /// let key = ScopedKey::scoped("network", "port");
    /// assert_eq!(key.as_str(), "network::port");
    /// ```
    pub fn scoped(section: &str, base_name: &str) -> Self {
        ScopedKey(format!("{}::{}", section, base_name))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ScopedKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the section portion of the key (empty for the default scope).
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::scoped_key::ScopedKey;
    ///
    /// assert_eq!(ScopedKey::scoped("alpha", "x").section(), "alpha");
    /// assert_eq!(ScopedKey::scoped("", "x").section(), "");
    /// ```
    pub fn section(&self) -> &str {
        self.0.split_once("::").map_or("", |(section, _)| section)
    }

    /// Returns the base key name portion of the key.
    pub fn base_name(&self) -> &str {
        self.0.split_once("::").map_or(self.0.as_str(), |(_, base)| base)
    }
}

impl From<String> for ScopedKey {
    fn from(s: String) -> Self {
        ScopedKey(s)
    }
}

impl From<&str> for ScopedKey {
    fn from(s: &str) -> Self {
        ScopedKey(s.to_string())
    }
}

impl From<ScopedKey> for String {
    fn from(key: ScopedKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ScopedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
