use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown catalog category: {0}")]
    ConfigKey(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("record {line} has {found} fields, header has {expected}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("no such column: {0}")]
    UnknownColumn(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("input cancelled")]
    Interrupted,

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl PlaylogError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlaylogError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PlaylogError>;
