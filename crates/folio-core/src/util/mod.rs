//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities
//! - [`paths`]: Path helpers (tilde expansion, containment checks)

pub mod files;
pub mod paths;
