//! Centralized error handling for branding image resolution
//!
//! This module provides the error types shared across the crate and the
//! conventions for surfacing them.
//!
//! # Error Categories
//!
//! - **Filesystem Errors**: a slot directory exists but cannot be read
//! - **Configuration Errors**: invalid ambient configuration for the
//!   config-backed collaborators
//!
//! A missing slot directory is deliberately NOT an error: it is the normal
//! "nothing uploaded" outcome and is memoized as such. Unknown slot names on
//! the string-keyed entry points are likewise normalized to "not uploaded"
//! rather than surfaced.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using RebrandError
pub type RebrandResult<T> = Result<T, RebrandError>;
