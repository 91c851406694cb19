//! Global error handling for lstree
//!
//! Every failure here is fatal: errors propagate unchanged to the binary,
//! which reports them and exits non-zero. Nothing is retried and no
//! per-subtree recovery takes place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for lstree operations
#[derive(Error, Debug)]
pub enum ListError {
    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A target path or directory could not be opened
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    /// Metadata retrieval failed
    #[error("failed to stat {}: {}", .path.display(), .source)]
    Stat {
        path: PathBuf,
        source: io::Error,
    },

    /// Directory-stream iteration failed partway through
    #[error("failed to read directory {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// Writing an entry line to the output sink failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Specialized Result type for lstree operations
pub type Result<T> = std::result::Result<T, ListError>;
