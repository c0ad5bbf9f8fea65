//! Utility modules for branding image resolution
//!
//! This module contains reusable utilities that can be used
//! across different parts of the system.

pub mod url;

// Re-export commonly used types for convenience
pub use url::{ResourceUrlGenerator, UrlUtils};
