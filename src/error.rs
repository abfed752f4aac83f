use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhonelistError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("malformed field '{field}', expected key:value")]
    MalformedField { field: String },

    #[error("address '{value}' has {found} part(s), expected street, postal code, city")]
    PostalArity { value: String, found: usize },

    #[error("{command} requires an argument, usage: {usage}")]
    MissingArgument { command: String, usage: String },

    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PhonelistResult<T> = Result<T, PhonelistError>;
