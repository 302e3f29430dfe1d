use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirLinesError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DirLinesError {
    /// Short, stable name of the error kind.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage",
            Self::Walk { .. } => "Walk",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "Io",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Full message including the underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> String {
        use std::error::Error as _;

        match self.source() {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }

    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, DirLinesError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
