//! Button tokens the controller understands.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single key press.
///
/// # Example
///
/// ```rust
/// use calcmind::core::{Operator, Token};
///
/// assert_eq!("7".parse::<Token>().unwrap(), Token::Digit(7));
/// assert_eq!("*".parse::<Token>().unwrap(), Token::Operator(Operator::Multiply));
/// assert!("x".parse::<Token>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    Point,
    Operator(Operator),
    Sqrt,
    Percent,
    Equals,
    Clear,
}

/// Raised when text does not name a key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unrecognized token '{0}'")]
    Unrecognized(String),
}

impl Token {
    /// The character this token appends to an entry, if it is one.
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Operator::from_symbol(s) {
            return Ok(Self::Operator(op));
        }
        match s {
            "." => Ok(Self::Point),
            "sqrt" => Ok(Self::Sqrt),
            "%" => Ok(Self::Percent),
            "=" => Ok(Self::Equals),
            "C" => Ok(Self::Clear),
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Ok(Self::Digit(d as u8)),
                    _ => Err(TokenError::Unrecognized(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Point => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Sqrt => f.write_str("sqrt"),
            Self::Percent => f.write_str("%"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}
