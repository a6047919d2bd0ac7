use crate::cpp::errors::ParserError;
use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Parser, Tree};

/// Tree-sitter parser wrapper for C++ source code.
///
/// One `CppParser` is one parse session. The multi-file driver creates a
/// fresh session per source file and drops it before the next file begins,
/// so no tree or parser state ever aliases across files.
pub struct CppParser {
    parser: Parser,
}

impl CppParser {
    /// Create a new C++ parser.
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = SupportLang::Cpp.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| ParserError::LanguageSet)?;

        Ok(Self { parser })
    }

    /// Parse source code and return the tree along with the source.
    ///
    /// Malformed C++ still yields a tree (containing ERROR nodes) that can
    /// be walked normally. `None` means tree-sitter produced no tree at all;
    /// callers treat that as an empty translation unit.
    pub fn parse_with_source<'a>(&mut self, source: &'a str) -> Option<ParsedSource<'a>> {
        let tree = self.parser.parse(source, None)?;
        Some(ParsedSource { source, tree })
    }
}

/// A parsed source file with its tree-sitter tree.
pub struct ParsedSource<'a> {
    pub source: &'a str,
    pub tree: Tree,
}

impl<'a> ParsedSource<'a> {
    /// Get the root node of the tree (the translation unit).
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Check if the tree contains any ERROR nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}
