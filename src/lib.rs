//! cppgrep: declaration-aware grep for C++ source files
//!
//! Searches C++ sources for declarations (classes, structs, templates,
//! functions, conversion operators, variables, fields, parameters) whose
//! name contains a query substring, and reports each match's kind, location
//! and identifier. Think "grep, but it knows what a declaration is".
//!
//! # Architecture
//!
//! Parsing is delegated to tree-sitter's C++ grammar behind the [`cpp`]
//! facade; all grep intelligence lives in [`grep`]: a closed ten-kind
//! classification table, four user-facing filter buckets, plain substring
//! query matching and a pre-order tree walker. The multi-file driver feeds
//! non-empty per-file results to a caller-supplied sink in request order.
//!
//! # Example
//!
//! ```no_run
//! use cppgrep::{grep_file, FilterSpec, QuerySpec};
//! use std::path::Path;
//!
//! let filter = FilterSpec { structs: true, ..FilterSpec::default() };
//! let query = QuerySpec::new("person", false);
//!
//! match grep_file(Path::new("people.cpp"), &filter, &query) {
//!     Ok(Some(result)) => println!("{} matches", result.entries.len()),
//!     Ok(None) => println!("no matches"),
//!     Err(e) => eprintln!("grep failed: {}", e),
//! }
//! ```

pub mod cpp;
pub mod grep;
pub mod output;

// Re-exports
pub use cpp::{
    visit_children, CppParser, Cursor, CursorKind, ParsedSource, ParserError, VisitAction,
};
pub use grep::{
    classify, grep_all, grep_file, CategoryGroup, DeclEntry, DeclInfo, FilterSpec, GrepError,
    GrepRequest, GrepResult, QuerySpec,
};
