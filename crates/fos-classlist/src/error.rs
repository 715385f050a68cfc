//! classList Errors
//!
//! Each failure maps onto the script exception a binding should raise.

use std::fmt;

/// classList method that rejected a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Add,
    Remove,
    Toggle,
    Contains,
    Replace,
}

impl Method {
    /// Script-visible method name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Toggle => "toggle",
            Self::Contains => "contains",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exception constructor a binding should use for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeError,
    SyntaxError,
    Error,
}

/// classList error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassListError {
    #[error("Failed to construct '{interface}': the argument provided is not an element.")]
    NotAnElement { interface: String },

    #[error("Failed to execute '{method}' on '{interface}': the token provided ('{value}') is not a string.")]
    NotAString {
        interface: String,
        method: Method,
        value: String,
    },

    #[error("Failed to execute '{method}' on '{interface}': the token provided must not be empty.")]
    EmptyToken { interface: String, method: Method },

    #[error("Failed to execute '{method}' on '{interface}': the token provided ('{token}') contains HTML space characters, which are not valid in tokens.")]
    InvalidCharacter {
        interface: String,
        method: Method,
        token: String,
    },
}

impl ClassListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAnElement { .. } | Self::NotAString { .. } => ErrorKind::TypeError,
            Self::EmptyToken { .. } => ErrorKind::SyntaxError,
            Self::InvalidCharacter { .. } => ErrorKind::Error,
        }
    }

    /// Method that raised the error (`None` for construction failures)
    pub fn method(&self) -> Option<Method> {
        match self {
            Self::NotAnElement { .. } => None,
            Self::NotAString { method, .. }
            | Self::EmptyToken { method, .. }
            | Self::InvalidCharacter { method, .. } => Some(*method),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassListError>;
