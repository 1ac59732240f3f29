// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # stringcase: fast string case conversions
//!
//! Converts identifiers and phrases between lexical conventions:
//! snake_case, camelCase, PascalCase, CONST_CASE, path/case, Sentence case,
//! Title Case and a handful of simple filters.
//!
//! ## Quick Start
//!
//! ```rust
//! use stringcase::{camelcase, constcase, snakecase, titlecase, Case};
//!
//! assert_eq!(snakecase("FooBarBaz"), "foo_bar_baz");
//! assert_eq!(camelcase("foo_bar-baz qux"), "fooBarBazQux");
//! assert_eq!(constcase("fooBar"), "FOO_BAR");
//! assert_eq!(titlecase("foo_bar_baz"), "Foo Bar Baz");
//!
//! // Pick a style at runtime
//! let case: Case = "kebab-case".parse().unwrap();
//! assert_eq!(case.apply("FooBar"), "foo-bar");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │  PRIMITIVES   lowercase  uppercase  trimcase  alphanumcase   │
//! │                                                              │
//! │  NORMALIZER   snakecase ──┬──► constcase                     │
//! │                           ├──► pathcase / backslashcase      │
//! │                           ├──► spinalcase / dotcase          │
//! │                           └──► titlecase                     │
//! │                                                              │
//! │  CAMEL        camelcase ──► pascalcase                       │
//! │  PROSE        sentencecase                                   │
//! │  SIMPLE       capitalcase                                    │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Casing Rules
//!
//! All casing is ASCII-only. Non-ASCII characters are never case-mapped:
//! the separator styles pass them through, while [`camelcase`],
//! [`pascalcase`] and [`alphanumcase`] drop them along with other symbols.
//! Every transform is a pure `&str -> String` function with no shared state,
//! so all of them are safe to call from any number of threads.

// Transforms
pub mod camel;
pub mod derived;
pub mod primitives;
pub mod sentence;
pub mod snake;

// Dispatch and configuration
pub mod case;
pub mod config;
pub mod error;

// Re-exports
pub use camel::{camelcase, pascalcase};
pub use case::{convert, convert_all, convert_bytes, text_from_bytes, Case, Conversion};
pub use config::{Config, OutputFormat};
pub use derived::{
    backslashcase, capitalcase, constcase, dotcase, pathcase, spinalcase, titlecase,
};
pub use error::{Error, Result};
pub use primitives::{alphanumcase, lowercase, trimcase, uppercase};
pub use sentence::sentencecase;
pub use snake::snakecase;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
