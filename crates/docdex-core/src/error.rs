use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("malformed entry #{index}: {defect}")]
    MalformedEntry { index: usize, defect: Defect },

    #[error("target {index} out of range for `{key}` ({len} targets)")]
    IndexOutOfRange { key: String, index: usize, len: usize },

    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("invalid JSON index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a search bucket file name: {0}")]
    UnknownBucket(String),

    #[error("key index: {0}")]
    KeyIndex(#[from] fst::Error),
}

impl IndexError {
    pub fn malformed(index: usize, defect: Defect) -> Self {
        IndexError::MalformedEntry { index, defect }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

/// What is wrong with a rejected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    NotARecord,
    MissingKey,
    MissingDisplayName,
    NoTargets,
    /// Target at this position is not a well-formed triple.
    BadTarget(usize),
    /// Target at this position has an empty anchor.
    MissingAnchor(usize),
    DuplicateKey(String),
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::NotARecord => write!(f, "not a [key, [name, targets]] record"),
            Defect::MissingKey => write!(f, "missing key"),
            Defect::MissingDisplayName => write!(f, "missing display name"),
            Defect::NoTargets => write!(f, "no targets"),
            Defect::BadTarget(i) => {
                write!(f, "target {i} is not an [anchor, signature, scope] triple")
            }
            Defect::MissingAnchor(i) => write!(f, "target {i} has no anchor"),
            Defect::DuplicateKey(key) => write!(f, "duplicate key `{key}`"),
        }
    }
}
