use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to set C++ language for parser")]
    LanguageSet,
}
