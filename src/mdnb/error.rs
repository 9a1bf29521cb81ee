use crate::convert::TokenizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdnbError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Not valid UTF-8: {0}")]
    Encoding(PathBuf),

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MdnbError>;
