//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides a mixed-domain token type so tests can put strings, integers
//! and booleans into one statically typed map.

#![doc(hidden)]

use std::fmt;

/// A key or value that may be a string, an integer, or a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Str(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::Str(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token::Int(i64::from(value))
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Token::Int(value)
    }
}

impl From<bool> for Token {
    fn from(value: bool) -> Self {
        Token::Bool(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Str(s) => write!(f, "{:?}", s),
            Token::Int(i) => write!(f, "{}", i),
            Token::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Shorthand for `Token::from`.
pub fn tok(value: impl Into<Token>) -> Token {
    value.into()
}

/// Build a `Vec<(Token, Token)>` from pairs of mixed literals.
///
/// ```
/// use ordbimap::token_pairs;
/// use ordbimap::testing::Token;
///
/// let pairs = token_pairs![("a", 1), (true, false)];
/// assert_eq!(pairs[1], (Token::Bool(true), Token::Bool(false)));
/// ```
#[macro_export]
macro_rules! token_pairs {
    ($(($key:expr, $value:expr)),* $(,)?) => {
        vec![$(
            (
                $crate::testing::Token::from($key),
                $crate::testing::Token::from($value),
            )
        ),*]
    };
}
