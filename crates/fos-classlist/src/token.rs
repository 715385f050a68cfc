//! Token List
//!
//! Tokenizing and validating space-separated class tokens.

use std::fmt;

use crate::error::{ClassListError, Method};
use crate::value::TokenArg;

/// ASCII whitespace as defined by HTML: space, tab, LF, FF, CR
pub const HTML_SPACE: [char; 5] = [' ', '\t', '\n', '\x0C', '\r'];

/// Check if a character is HTML whitespace
#[inline]
pub fn is_html_space(c: char) -> bool {
    HTML_SPACE.contains(&c)
}

/// Split on runs of HTML whitespace, skipping empty segments
pub fn tokenize(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_html_space).filter(|t| !t.is_empty())
}

/// Why a token argument was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidToken {
    NotAString(String),
    Empty,
    ContainsSpace(String),
}

impl InvalidToken {
    /// Attach the calling method and interface
    pub fn into_error(self, interface: &str, method: Method) -> ClassListError {
        let interface = interface.to_string();
        match self {
            Self::NotAString(value) => ClassListError::NotAString { interface, method, value },
            Self::Empty => ClassListError::EmptyToken { interface, method },
            Self::ContainsSpace(token) => ClassListError::InvalidCharacter { interface, method, token },
        }
    }
}

/// Validate a token argument. Type, then emptiness, then whitespace.
pub fn validate<'a>(arg: TokenArg<'a>) -> Result<&'a str, InvalidToken> {
    let Some(token) = arg.as_str() else {
        return Err(InvalidToken::NotAString(arg.to_string()));
    };
    if token.is_empty() {
        return Err(InvalidToken::Empty);
    }
    if token.contains(is_html_space) {
        return Err(InvalidToken::ContainsSpace(token.to_string()));
    }
    Ok(token)
}

/// Ordered tokens parsed from a class attribute string
///
/// Parsing keeps duplicates as found; `value()` collapses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from an HTML whitespace separated string
    pub fn parse(s: &str) -> Self {
        let tokens = tokenize(s).map(str::to_string).collect();
        Self { tokens }
    }

    /// Number of tokens, duplicates included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|s| s.as_str())
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Append token if absent, returns whether it was added
    pub fn add(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove every occurrence of token
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    /// Keep only tokens matching the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.tokens.retain(|t| keep(t.as_str()));
    }

    /// Toggle token, returns new state
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        match force {
            Some(true) => {
                self.add(token);
                true
            }
            Some(false) => {
                self.remove(token);
                false
            }
            None => {
                if self.contains(token) {
                    self.remove(token);
                    false
                } else {
                    self.add(token);
                    true
                }
            }
        }
    }

    /// Replace first occurrence of `old` with `new`
    ///
    /// If `new` already appears, the earlier of the two positions wins and the
    /// other is dropped.
    pub fn replace(&mut self, old: &str, new: &str) -> bool {
        let Some(pos) = self.tokens.iter().position(|t| t == old) else {
            return false;
        };
        match self.tokens.iter().position(|t| t == new) {
            Some(existing) if existing < pos => {
                self.tokens.remove(pos);
            }
            _ => {
                self.tokens[pos] = new.to_string();
            }
        }
        self.dedup();
        true
    }

    /// Collapse duplicates, keeping first occurrence
    pub fn dedup(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.tokens.len());
        self.tokens.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(t.clone());
                true
            }
        });
    }

    /// Serialized form: unique tokens joined by a single space
    pub fn value(&self) -> String {
        let mut out = String::new();
        let mut seen: Vec<&str> = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            if seen.contains(&token.as_str()) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
            seen.push(token);
        }
        out
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens: Vec<_> = tokenize("\t foo\n\nbar \x0C baz\r").collect();
        assert_eq!(tokens, ["foo", "bar", "baz"]);
        assert_eq!(tokenize("   ").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_tokenize_keeps_non_html_space() {
        // Vertical tab and NBSP are not HTML whitespace
        let tokens: Vec<_> = tokenize("a\x0Bb c\u{00A0}d").collect();
        assert_eq!(tokens, ["a\x0Bb", "c\u{00A0}d"]);
    }

    #[test]
    fn test_validate_order() {
        assert_eq!(validate(TokenArg::from("foo")), Ok("foo"));
        assert_eq!(
            validate(TokenArg::Undefined),
            Err(InvalidToken::NotAString("undefined".into()))
        );
        assert_eq!(validate(TokenArg::from("")), Err(InvalidToken::Empty));
        assert_eq!(
            validate(TokenArg::from("a\tb")),
            Err(InvalidToken::ContainsSpace("a\tb".into()))
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let list = TokenList::parse("btn active btn");
        assert_eq!(list.len(), 3);
        assert_eq!(list.item(2), Some("btn"));
        assert_eq!(list.value(), "btn active");
    }

    #[test]
    fn test_iter_and_display() {
        let list = TokenList::parse(" b a\tb ");
        let tokens: Vec<_> = list.iter().collect();
        assert_eq!(tokens, ["b", "a", "b"]);
        assert_eq!(list.to_string(), "b a");
        assert_eq!(format!("[{}]", TokenList::new()), "[]");
    }

    #[test]
    fn test_add_remove() {
        let mut list = TokenList::new();
        assert!(list.add("foo"));
        assert!(!list.add("foo"));
        list.add("bar");
        assert_eq!(list.len(), 2);

        list.remove("foo");
        assert_eq!(list.len(), 1);
        assert!(!list.contains("foo"));
    }

    #[test]
    fn test_toggle() {
        let mut list = TokenList::new();

        assert!(list.toggle("active", None));
        assert!(list.contains("active"));

        assert!(!list.toggle("active", None));
        assert!(!list.contains("active"));

        assert!(list.toggle("active", Some(true)));
        assert!(list.toggle("active", Some(true)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_replace() {
        let mut list = TokenList::parse("old-class other");

        assert!(list.replace("old-class", "new-class"));
        assert!(!list.contains("old-class"));
        assert_eq!(list.value(), "new-class other");

        assert!(!list.replace("missing", "x"));
    }

    #[test]
    fn test_replace_collapses_existing() {
        let mut list = TokenList::parse("a b c");
        assert!(list.replace("c", "a"));
        assert_eq!(list.value(), "a b");

        let mut list = TokenList::parse("a b c");
        assert!(list.replace("a", "c"));
        assert_eq!(list.value(), "c b");
    }
}
