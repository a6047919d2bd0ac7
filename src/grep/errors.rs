use crate::cpp::errors::ParserError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrepError {
    #[error("could not open source file {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parser(#[from] ParserError),
}
