//! Core traits for Folio.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where a site's
//! content lives so the content and site crates never depend on a concrete
//! configuration type.

use std::path::PathBuf;

use crate::Result;

/// Content type key for project detail documents.
pub const PROJECTS_CONTENT: &str = "projects";

/// Trait for site configuration.
///
/// Implemented by the CLI's `FolioConfig` and by test fixtures. Content
/// crates only ever ask for paths through this trait.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across request handlers
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "portfolio"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join("content").join(content_type))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for log lines and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all site data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g. the working
    /// directory is gone).
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type.
    ///
    /// `content_type` is a key like [`PROJECTS_CONTENT`]. The implementation
    /// decides how to map it to a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;
}
