//! fOS classList
//!
//! `classList` for HTML and SVG elements alike.
//!
//! HTML elements expose their class attribute through `className`; SVG
//! elements only through `getAttribute`/`setAttribute`. `ClassList` probes the
//! host once and then reads and writes the attribute on every call.
//!
//! # Example
//! ```rust
//! use fos_classlist::{class_list, HtmlElement};
//!
//! let mut div = HtmlElement::new("div").with_class("btn");
//! let mut list = class_list(&mut div)?;
//! list.add("active")?;
//! assert!(!list.toggle("btn", None)?);
//! assert_eq!(list.value(), "active");
//! # Ok::<(), fos_classlist::ClassListError>(())
//! ```

mod classlist;
mod config;
mod error;
pub mod host;
pub mod token;
mod value;

pub use classlist::{class_list, ClassList};
pub use config::{Config, DEFAULT_INTERFACE_NAME};
pub use error::{ClassListError, ErrorKind, Method, Result};
pub use host::{ClassAccess, ClassHost, HtmlElement, Node, SvgElement};
pub use token::TokenList;
pub use value::{RemoveArg, TokenArg};

/// Re-exported so callers can build removal patterns without a direct dependency
pub use regex::Regex;
