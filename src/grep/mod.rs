//! Declaration grep engine: classification, filtering, query matching and
//! the multi-file driver.
//!
//! Data flows one way: the driver parses one file at a time, the walker
//! visits its tree in pre-order, and every node is pushed through
//! classify → filter → query before it becomes a [`DeclEntry`]. Files that
//! produce no entries never reach the caller's sink.

pub mod entry;
pub mod errors;
pub mod filter;
pub mod query;
pub mod walker;

pub use entry::{classify, CategoryGroup, DeclEntry, DeclInfo};
pub use errors::GrepError;
pub use filter::FilterSpec;
pub use query::QuerySpec;
pub use walker::walk;

use crate::cpp::parser::CppParser;
use std::fs;
use std::path::{Path, PathBuf};

/// One grep invocation: the files to search and the specs to search with.
#[derive(Debug, Clone)]
pub struct GrepRequest {
    pub files: Vec<PathBuf>,
    pub filter: FilterSpec,
    pub query: QuerySpec,
}

/// All matches for one source file, in traversal order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepResult {
    pub source: PathBuf,
    pub entries: Vec<DeclEntry>,
}

/// Grep a single file. Returns `Ok(None)` when nothing matched.
///
/// The parse session is scoped to this call; it is dropped before the
/// driver moves on to the next file. A source that tree-sitter refuses to
/// produce a tree for counts as an empty translation unit.
pub fn grep_file(
    path: &Path,
    filter: &FilterSpec,
    query: &QuerySpec,
) -> Result<Option<GrepResult>, GrepError> {
    let source = fs::read_to_string(path).map_err(|e| GrepError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut parser = CppParser::new()?;
    let mut entries = Vec::new();
    if let Some(parsed) = parser.parse_with_source(&source) {
        walk(&parsed, filter, query, |entry| entries.push(entry));
    }

    if entries.is_empty() {
        return Ok(None);
    }
    Ok(Some(GrepResult {
        source: path.to_path_buf(),
        entries,
    }))
}

/// Grep every requested file in order, pushing non-empty results to `sink`.
///
/// Missing files fail fast: every requested path is validated before any
/// parsing starts, so a bad path never produces a partial run.
pub fn grep_all<F>(request: &GrepRequest, mut sink: F) -> Result<(), GrepError>
where
    F: FnMut(GrepResult),
{
    for path in &request.files {
        if !path.exists() {
            return Err(GrepError::FileNotFound { path: path.clone() });
        }
    }

    for path in &request.files {
        if let Some(result) = grep_file(path, &request.filter, &request.query)? {
            sink(result);
        }
    }
    Ok(())
}
