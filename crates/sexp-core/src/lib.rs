//! # sexp-core
//!
//! One-way converter from JSON documents to Lisp S-expression text.
//!
//! Arrays become parenthesized lists, objects become `#(...)` vectors of
//! dotted `(key . value)` pairs with raw unquoted keys, strings are quoted
//! with backslash escapes, booleans render as `#t`/`#f` and null as `NIL`.
//! There is no reverse parser and no round-trip guarantee; the conversion is
//! a single recursive walk over the decoded value tree.
//!
//! ## Quick start
//!
//! ```rust
//! use sexp_core::convert;
//!
//! let sexp = convert(r#"{"name": "Alice", "scores": [95, 87, 92]}"#).unwrap();
//! assert_eq!(sexp, r#"#((name . "Alice") (scores . (95 87 92)))"#);
//! ```
//!
//! ## Modules
//!
//! - [`render`] — JSON string / value tree → S-expression string
//! - [`error`] — Error type for decode failures
pub mod error;
pub mod render;

pub use error::SexpError;
pub use render::{convert, render};
