//! # Classmark - Token Tree
//!
//! This module defines the positional token tree produced by the scanner and
//! consumed by the HTML renderer. The tree is the only contract between the
//! two halves of the crate, so it is kept as a plain, order-preserving
//! structure that serializes straight to JSON.
//!
//! ## Submodules
//!
//! - **[kind]** - The closed set of token types
//! - **[token]** - The [`Token`] node and its [`Position`] spans
//!
//! ## Shape
//!
//! ```text
//! ["note"] # Title
//! - one
//! - two
//! ```
//!
//! scans to
//!
//! ```text
//! CLASS "note"
//!   HEADING_1 "Title"
//! UNORDERED_LIST
//!   LIST_ITEM
//!     TEXT "one"
//!   LIST_ITEM
//!     TEXT "two"
//! EOF
//! ```
//!
//! Every token records the span of text it consumed: `start` and `end`
//! hold a 1-based line and a 0-based column. Multi-line constructs end on
//! the last line they consumed.
pub mod kind;
pub mod token;

pub use kind::TokenKind;
pub use token::{Position, Token};
