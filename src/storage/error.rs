use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// Failures raised while loading or saving a figure
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Unsupported file format: '{suffix}'")]
    UnsupportedFormat { suffix: String },

    #[error("{format} serialization is not implemented")]
    NotImplemented { format: &'static str },

    #[error("Invalid {format} file format: {reason}")]
    InvalidData {
        format: &'static str,
        reason: String,
    },

    #[error("Invalid {field} value {value:?}: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of a [`FormatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No codec is registered for the path suffix
    UnsupportedFormat,
    /// The codec is registered but is a stub
    NotImplemented,
    /// The codec ran and rejected the content
    InvalidData,
    /// The file system failed underneath the codec
    Io,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            FormatError::NotImplemented { .. } => ErrorKind::NotImplemented,
            FormatError::InvalidData { .. }
            | FormatError::InvalidNumber { .. }
            | FormatError::MalformedJson(_) => ErrorKind::InvalidData,
            FormatError::Io { .. } => ErrorKind::Io,
        }
    }

    /// True for content errors, including numeric and JSON parse failures
    pub fn is_invalid_data(&self) -> bool {
        self.kind() == ErrorKind::InvalidData
    }

    pub(crate) fn invalid_data(format: &'static str, reason: impl Into<String>) -> Self {
        FormatError::InvalidData {
            format,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}
