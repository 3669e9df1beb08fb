use std::path::PathBuf;
use thiserror::Error;

/// Result type for splitter operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while classifying and splitting a source file
#[derive(Error, Debug)]
pub enum SplitError {
    /// No language is registered for the file's extension
    #[error("no language found for {0}")]
    NoLanguageFound(PathBuf),

    /// The parser produced no usable tree, for the primary language and
    /// every configured fallback
    #[error("failed to parse {file}: {reason}")]
    ParseFailed { file: PathBuf, reason: String },

    /// A tree-dependent operation ran before the file was parsed
    #[error("source file {0} has not been parsed")]
    NotParsed(PathBuf),

    /// The destination is missing or not a directory
    #[error("destination {0} is not a directory")]
    DestinationInvalid(PathBuf),

    /// A named-unit file is already present on disk
    #[error("file {0} already exists")]
    UnitAlreadyExists(PathBuf),

    /// A unit carries no node its name could be derived from
    #[error("cannot derive a name for {kind} unit at bytes {start}..{end}")]
    MissingNodeName {
        kind: &'static str,
        start: usize,
        end: usize,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Create a parse failure for a file
    pub fn parse_failed(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a no-language error for a file
    pub fn no_language(file: impl Into<PathBuf>) -> Self {
        Self::NoLanguageFound(file.into())
    }
}
