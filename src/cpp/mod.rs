//! C++ front end built on tree-sitter.
//!
//! This module is the only place that touches the external parser. It wraps
//! one tree-sitter session per source file and exposes a cursor-style view
//! over the syntax tree: a node kind, an identifier spelling, a 1-based
//! source location, and the pre-order visitation primitive the grep walker
//! is driven by.

pub mod cursor;
pub mod errors;
pub mod parser;

pub use cursor::{visit_children, Cursor, CursorKind, VisitAction};
pub use errors::ParserError;
pub use parser::{CppParser, ParsedSource};
