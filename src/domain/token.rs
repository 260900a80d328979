// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token type with type-safe conversions.
//!
//! This module provides the `Token` type, one lexical unit extracted from a
//! value expression. A token carries no type at parse time; type is assigned
//! only at access time, by the caller's request, through the conversion
//! methods defined here.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One lexical unit from a value expression.
///
/// `Token` stores the extracted text as-is and provides type-safe conversion
/// methods to common Rust types. Each conversion takes the scoped key name so
/// a failure can report both the key and the offending token.
///
/// Integer conversions accept an optional sign followed by base-10 digits or
/// a `0x`/`0X` hex prefix. The boolean vocabulary is total and
/// case-insensitive: `true`, `yes`, `on`, and `1` are true; `false`, `no`,
/// `off`, and `0` are false; anything else is a
/// [`TypeConversion`](ConfigError::TypeConversion) error.
///
/// # Examples
///
/// ```
/// use specfile::domain::token::Token;
///
/// let token = Token::from("0x20");
/// assert_eq!(token.as_i64("alpha::mask").unwrap(), 32);
///
/// let token = Token::from("yes");
/// assert!(token.as_bool("alpha::flag").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token(String);

/// Rewrites a signed `0x`-prefixed literal into `from_str_radix` form.
fn hex_digits(s: &str) -> Option<String> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    Some(if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    })
}

macro_rules! int_conversion {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self, key: &str) -> Result<$ty> {
            let result = match hex_digits(&self.0) {
                Some(digits) => <$ty>::from_str_radix(&digits, 16),
                None => self.0.parse::<$ty>(),
            };
            result.map_err(|e| ConfigError::from_parse_int_error(key, &self.0, e))
        }
    };
}

impl Token {
    /// Creates a new `Token` from a `String`.
    pub fn new(text: String) -> Self {
        Token(text)
    }

    /// Returns the token text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token text as an owned `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the token to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "on", "1"
    /// - `false`: "false", "no", "off", "0"
    ///
    /// Any other token is an error, never silently false.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::token::Token;
    ///
    /// assert!(Token::from("True").as_bool("::flag").unwrap());
    /// assert!(!Token::from("off").as_bool("::flag").unwrap());
    /// assert!(Token::from("maybe").as_bool("::flag").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::bad_bool(key, &self.0)),
        }
    }

    int_conversion! {
        /// Converts the token to an `i32`.
        ///
        /// Accepts an optional sign and base-10 or `0x`-prefixed hex digits.
        as_i32, i32
    }

    int_conversion! {
        /// Converts the token to an `i64`.
        ///
        /// Accepts an optional sign and base-10 or `0x`-prefixed hex digits.
        ///
        /// # Examples
        ///
        /// ```
        /// use specfile::domain::token::Token;
        ///
        /// assert_eq!(Token::from("-42").as_i64("::n").unwrap(), -42);
        /// assert_eq!(Token::from("0xFF").as_i64("::n").unwrap(), 255);
        /// ```
        as_i64, i64
    }

    int_conversion! {
        /// Converts the token to a `u32`.
        as_u32, u32
    }

    int_conversion! {
        /// Converts the token to a `u64`.
        as_u64, u64
    }

    /// Converts the token to an `f64`.
    ///
    /// Accepts standard decimal and exponent notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::token::Token;
    ///
    /// assert_eq!(Token::from("3.14").as_f64("::pi").unwrap(), 3.14);
    /// assert_eq!(Token::from("1e3").as_f64("::n").unwrap(), 1000.0);
    /// ```
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key, &self.0, e))
    }

    /// Parses the token into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfile::domain::token::Token;
    /// use std::net::IpAddr;
    ///
    /// let token = Token::from("127.0.0.1");
    /// let ip: IpAddr = token.parse("::host").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversion {
                key: key.to_string(),
                token: self.0.clone(),
                target: std::any::type_name::<T>(),
                source: Some(Box::new(e)),
            })
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
