// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format specs and tagged values for the format-driven accessor.
//!
//! A format spec is an ordered list of type codes describing how to interpret
//! a key's token list positionally. Instead of threading a raw code string
//! through the conversion path, the spec is parsed up front into a closed
//! tagged-variant type so the conversion table stays exhaustive.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of types a format spec can request for one token.
///
/// Each variant corresponds to one format code character:
///
/// | Code | Variant |
/// |------|---------|
/// | `i`  | [`ValueType::Int`] |
/// | `f`  | [`ValueType::Float`] |
/// | `s`  | [`ValueType::Str`] |
/// | `b`  | [`ValueType::Bool`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    /// A signed integer (`i` code).
    Int,
    /// A floating-point number (`f` code).
    Float,
    /// A plain string (`s` code).
    Str,
    /// A boolean (`b` code).
    Bool,
}

impl ValueType {
    /// Returns the variant for a format code character, if recognized.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'i' => Some(ValueType::Int),
            'f' => Some(ValueType::Float),
            's' => Some(ValueType::Str),
            'b' => Some(ValueType::Bool),
            _ => None,
        }
    }

    /// Returns the format code character for this variant.
    pub fn code(&self) -> char {
        match self {
            ValueType::Int => 'i',
            ValueType::Float => 'f',
            ValueType::Str => 's',
            ValueType::Bool => 'b',
        }
    }

    /// Converts one token to a [`Value`] of this type.
    pub fn convert(&self, key: &str, token: &Token) -> Result<Value> {
        match self {
            ValueType::Int => token.as_i64(key).map(Value::Int),
            ValueType::Float => token.as_f64(key).map(Value::Float),
            ValueType::Str => Ok(Value::Str(token.as_string())),
            ValueType::Bool => token.as_bool(key).map(Value::Bool),
        }
    }
}

/// One typed value produced by the format-driven accessor.
///
/// # Examples
///
/// ```
/// use specfile::domain::format::Value;
///
/// let value = Value::Int(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_f64(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A converted integer.
    Int(i64),
    /// A converted float.
    Float(f64),
    /// The token text unchanged.
    Str(String),
    /// A converted boolean.
    Bool(bool),
}

impl Value {
    /// Returns the integer if this is an `Int` value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float` value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the [`ValueType`] tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Bool(_) => ValueType::Bool,
        }
    }
}

/// An ordered list of type codes, one per expected token.
///
/// Parsing rejects any character outside `i`, `f`, `s`, `b` with
/// [`ConfigError::InvalidFormat`] before any token is examined.
///
/// # Examples
///
/// ```
/// use specfile::domain::format::{FormatSpec, ValueType};
///
/// let spec: FormatSpec = "ifsb".parse().unwrap();
/// assert_eq!(spec.len(), 4);
/// assert_eq!(spec.types()[0], ValueType::Int);
///
/// assert!("ixf".parse::<FormatSpec>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec(Vec<ValueType>);

impl FormatSpec {
    /// Returns the requested types in positional order.
    pub fn types(&self) -> &[ValueType] {
        &self.0
    }

    /// Returns the number of type codes in the spec.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the spec has no codes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for FormatSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let mut types = Vec::with_capacity(s.len());
        for code in s.chars() {
            match ValueType::from_code(code) {
                Some(ty) => types.push(ty),
                None => {
                    return Err(ConfigError::InvalidFormat {
                        spec: s.to_string(),
                        code,
                    })
                }
            }
        }
        Ok(FormatSpec(types))
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ty in &self.0 {
            write!(f, "{}", ty.code())?;
        }
        Ok(())
    }
}
