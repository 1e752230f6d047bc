//! Global error handling for treescribe
//!
//! Every failure that should abort an invocation is represented here and
//! bubbles to a single top-level handler in `main`. Recoverable failures
//! (unreadable subdirectories) never reach this type; the walker logs them
//! and keeps going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for treescribe operations
#[derive(Error, Debug)]
pub enum TreescribeError {
    /// No folder available to operate on
    #[error("no folder is available to generate a structure for")]
    NoWorkspace,

    /// The designated root itself cannot be read
    #[error("cannot read directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file cannot be written
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Clipboard delivery failed
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// An interactive prompt failed (not cancellation, which is `Ok(None)`)
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The user settings file exists but cannot be parsed
    #[error("invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Other file system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for treescribe operations
pub type Result<T> = std::result::Result<T, TreescribeError>;
