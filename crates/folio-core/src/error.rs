//! Error types for Folio operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Folio crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No content document exists for the requested identifier.
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// A front-matter block is present but cannot be read as key/value data.
    #[error("Malformed frontmatter in {path}: {reason}")]
    MalformedFrontmatter {
        /// Document the block was read from.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A slug that is not safe to turn into a file name.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Wrap a bare I/O error.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(err)
    }

    /// Wrap an I/O error together with the path that caused it.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a content-not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::ContentNotFound(msg.into())
    }

    /// Create a malformed-frontmatter error.
    pub fn malformed_frontmatter(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFrontmatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-slug error.
    pub fn invalid_slug(slug: impl Into<String>) -> Self {
        Self::InvalidSlug(slug.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// True when the error means "there is nothing to show" for a lookup.
    ///
    /// Missing files, unreadable files, unsafe slugs and malformed
    /// front-matter all land here; configuration problems do not.
    pub fn is_content_missing(&self) -> bool {
        matches!(
            self,
            Self::ContentNotFound(_)
                | Self::MalformedFrontmatter { .. }
                | Self::InvalidSlug(_)
                | Self::Io(_)
                | Self::IoWithPath { .. }
        )
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;
