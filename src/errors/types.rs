//! Error type definitions for branding image resolution
//!
//! This module defines the error types used throughout the crate. It uses
//! `thiserror` to provide automatic error trait implementations and proper
//! error chaining.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by branding image resolution
#[derive(Error, Debug)]
pub enum RebrandError {
    /// A slot directory exists but could not be opened or enumerated.
    ///
    /// This is never cached: the next query re-attempts the scan, so a
    /// transient condition (permissions, mount state) can clear on retry.
    #[error("Unable to open directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}
