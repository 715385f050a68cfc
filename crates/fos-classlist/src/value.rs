//! Token Arguments
//!
//! Script bindings hand classList methods arbitrary values, not just
//! strings. `TokenArg` carries those values far enough for validation to
//! reject them with the right error.

use std::fmt;

use regex::Regex;

/// Loosely typed token argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenArg<'a> {
    Str(&'a str),
    Bool(bool),
    Number(f64),
    Null,
    Undefined,
}

impl<'a> TokenArg<'a> {
    /// Get the string if this argument is one
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Stringifies the value the way a script engine would for an error message
impl fmt::Display for TokenArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => fmt_number(f, n),
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign: 1e+21, 1.5e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl<'a> From<&'a str> for TokenArg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for TokenArg<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s.as_str())
    }
}

impl From<bool> for TokenArg<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for TokenArg<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for TokenArg<'_> {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// `None` is treated as `null`
impl<'a> From<Option<&'a str>> for TokenArg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Self::Null, Self::Str)
    }
}

/// Argument to `classList.remove`: a single token or a pattern
#[derive(Debug, Clone, Copy)]
pub enum RemoveArg<'a> {
    Token(TokenArg<'a>),
    Pattern(&'a Regex),
}

impl<'a> From<TokenArg<'a>> for RemoveArg<'a> {
    fn from(arg: TokenArg<'a>) -> Self {
        Self::Token(arg)
    }
}

impl<'a> From<&'a Regex> for RemoveArg<'a> {
    fn from(pattern: &'a Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl<'a> From<&'a str> for RemoveArg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Token(TokenArg::Str(s))
    }
}

impl<'a> From<&'a String> for RemoveArg<'a> {
    fn from(s: &'a String) -> Self {
        Self::Token(TokenArg::Str(s.as_str()))
    }
}

impl From<bool> for RemoveArg<'_> {
    fn from(b: bool) -> Self {
        Self::Token(TokenArg::Bool(b))
    }
}

impl From<f64> for RemoveArg<'_> {
    fn from(n: f64) -> Self {
        Self::Token(TokenArg::Number(n))
    }
}

impl From<i32> for RemoveArg<'_> {
    fn from(n: i32) -> Self {
        Self::Token(TokenArg::from(n))
    }
}

impl<'a> From<Option<&'a str>> for RemoveArg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Self::Token(TokenArg::from(s))
    }
}
