//! Presentation layer: renders grep results to stdout.

use crate::grep::GrepResult;
use colored::Colorize;
use std::fs;

/// Print one file's matches: the absolute path as a header, then one line
/// per entry with its location, kind label and identifier.
pub fn print_result(result: &GrepResult) {
    let path = fs::canonicalize(&result.source).unwrap_or_else(|_| result.source.clone());
    println!("{}", path.display().to_string().green());

    for entry in &result.entries {
        let info = entry.info();
        println!(
            "{} [{}] {}",
            format!("{}:{}", info.line, info.column).blue(),
            entry.kind_label(),
            info.identifier
        );
    }
    println!();
}
