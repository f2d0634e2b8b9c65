use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a mail file.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: HeaderParseError,
    },
}

impl MessageError {
    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: HeaderParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Ligne de la section d'en-têtes sans `:` et sans marque de continuation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed header at line {line}: {snippet:?}")]
pub struct HeaderParseError {
    pub line: usize,
    pub snippet: String,
}
