// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion trait definitions.
//!
//! This module defines the trait seam between the raw token lists held by the
//! store and the typed values callers ask for. `FromToken` converts one token
//! into one scalar; `FromTokens` interprets a whole token list against the
//! static type of the requested output, which is the Rust rendering of an
//! implicit format spec built from the call site's types.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::token::Token;

/// A scalar type that can be produced from a single token.
///
/// Implementations exist for the closed set of scalar output types: signed
/// and unsigned integers, floats, booleans, and strings. Integer
/// implementations accept `0x`-prefixed hex as the [`Token`] conversion
/// methods do.
///
/// # Examples
///
/// ```
/// use specfile::domain::Token;
/// use specfile::ports::FromToken;
///
/// let token = Token::from("42");
/// let n = i32::from_token("alpha::n", &token).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait FromToken: Sized {
    /// Converts one token, reporting failures against `key`.
    fn from_token(key: &str, token: &Token) -> Result<Self>;
}

impl FromToken for bool {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_bool(key)
    }
}

impl FromToken for i32 {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_i32(key)
    }
}

impl FromToken for i64 {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_i64(key)
    }
}

impl FromToken for u32 {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_u32(key)
    }
}

impl FromToken for u64 {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_u64(key)
    }
}

impl FromToken for f64 {
    fn from_token(key: &str, token: &Token) -> Result<Self> {
        token.as_f64(key)
    }
}

impl FromToken for String {
    fn from_token(_key: &str, token: &Token) -> Result<Self> {
        Ok(token.as_string())
    }
}

/// A type that can be produced from an entry's whole token list.
///
/// This is the accessor protocol's arity contract:
///
/// - a scalar consumes exactly one token ([`ArityMismatch`] otherwise);
/// - a tuple of scalars consumes exactly one token per element;
/// - a `Vec<T>` consumes all tokens in order, however many there are.
///
/// Conversion is all-or-nothing: the first failure aborts the call and
/// nothing is returned.
///
/// [`ArityMismatch`]: ConfigError::ArityMismatch
///
/// # Examples
///
/// ```
/// use specfile::domain::Token;
/// use specfile::ports::FromTokens;
///
/// let tokens = vec![Token::from("1"), Token::from("2")];
/// let pair = <(i32, i32)>::from_tokens("alpha::range", &tokens).unwrap();
/// assert_eq!(pair, (1, 2));
///
/// let all: Vec<i32> = Vec::from_tokens("alpha::range", &tokens).unwrap();
/// assert_eq!(all, vec![1, 2]);
/// ```
pub trait FromTokens: Sized {
    /// Interprets the token list positionally, reporting failures against
    /// `key`.
    fn from_tokens(key: &str, tokens: &[Token]) -> Result<Self>;
}

macro_rules! impl_from_tokens_for_scalar {
    ($($ty:ty),+) => {
        $(
            impl FromTokens for $ty {
                fn from_tokens(key: &str, tokens: &[Token]) -> Result<Self> {
                    if tokens.len() != 1 {
                        return Err(ConfigError::ArityMismatch {
                            key: key.to_string(),
                            expected: 1,
                            found: tokens.len(),
                        });
                    }
                    <$ty as FromToken>::from_token(key, &tokens[0])
                }
            }
        )+
    };
}

impl_from_tokens_for_scalar!(bool, i32, i64, u32, u64, f64, String);

impl<T: FromToken> FromTokens for Vec<T> {
    fn from_tokens(key: &str, tokens: &[Token]) -> Result<Self> {
        tokens.iter().map(|t| T::from_token(key, t)).collect()
    }
}

macro_rules! impl_from_tokens_for_tuple {
    ($len:expr => $($ty:ident : $idx:tt),+) => {
        impl<$($ty: FromToken),+> FromTokens for ($($ty,)+) {
            fn from_tokens(key: &str, tokens: &[Token]) -> Result<Self> {
                if tokens.len() != $len {
                    return Err(ConfigError::ArityMismatch {
                        key: key.to_string(),
                        expected: $len,
                        found: tokens.len(),
                    });
                }
                Ok(($($ty::from_token(key, &tokens[$idx])?,)+))
            }
        }
    };
}

impl_from_tokens_for_tuple!(2 => A:0, B:1);
impl_from_tokens_for_tuple!(3 => A:0, B:1, C:2);
impl_from_tokens_for_tuple!(4 => A:0, B:1, C:2, D:3);
impl_from_tokens_for_tuple!(5 => A:0, B:1, C:2, D:3, E:4);
impl_from_tokens_for_tuple!(6 => A:0, B:1, C:2, D:3, E:4, F:5);
impl_from_tokens_for_tuple!(7 => A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_from_tokens_for_tuple!(8 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);
