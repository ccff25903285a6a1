//! Slug-keyed lookup of project documents.
//!
//! A slug names `<content_dir>/<slug>.md`. [`ProjectResolver::resolve`] is
//! the page-facing operation: every failure collapses to `None` and the
//! cause is logged. [`ProjectResolver::load`] returns the detailed error for
//! tooling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use folio_core::traits::PROJECTS_CONTENT;
use folio_core::util::files::{self, FindOptions};
use folio_core::util::paths;
use folio_core::{ConfigProvider, Error, Result};
use tokio::sync::RwLock;

use crate::document::ProjectDocument;

/// Longest accepted slug, in bytes.
pub const MAX_SLUG_LEN: usize = 128;

const EXTENSION: &str = "md";

/// Check that a slug is safe to turn into a file name.
///
/// Accepts ASCII letters, digits, `-`, `_` and `.`, starting with a letter
/// or digit, at most [`MAX_SLUG_LEN`] bytes and never containing `..`.
///
/// # Errors
///
/// Returns [`Error::InvalidSlug`] for anything else.
pub fn validate_slug(slug: &str) -> Result<&str> {
    let Some(first) = slug.chars().next() else {
        return Err(Error::invalid_slug(slug));
    };
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');

    if slug.len() > MAX_SLUG_LEN
        || !first.is_ascii_alphanumeric()
        || !slug.chars().all(allowed)
        || slug.contains("..")
        || !paths::is_single_component(slug)
    {
        return Err(Error::invalid_slug(slug));
    }
    Ok(slug)
}

type Cache = RwLock<HashMap<String, (SystemTime, ProjectDocument)>>;

/// Resolves slugs to parsed documents under one content directory.
#[derive(Debug)]
pub struct ProjectResolver {
    content_dir: PathBuf,
    cache: Option<Cache>,
}

impl ProjectResolver {
    /// Resolver reading fresh from `content_dir` on every call.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            cache: None,
        }
    }

    /// Resolver over the configured projects content directory.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.content_path(PROJECTS_CONTENT)?))
    }

    /// Enable or disable the read-through cache.
    ///
    /// Cached documents are reused until the file's modification time
    /// changes.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(Cache::default);
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// File path a slug maps to. The slug is not validated.
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.content_dir.join(format!("{slug}.{EXTENSION}"))
    }

    /// Resolve a slug, or `None` when there is no usable document.
    pub async fn resolve(&self, slug: &str) -> Option<ProjectDocument> {
        match self.load(slug).await {
            Ok(doc) => Some(doc),
            Err(e @ (Error::InvalidSlug(_) | Error::ContentNotFound(_))) => {
                log::debug!("Project '{slug}' not found: {e}");
                None
            }
            Err(e) => {
                log::warn!("Project '{slug}' could not be loaded: {e}");
                None
            }
        }
    }

    /// Load and parse a document, reporting why it is unavailable.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSlug`] for unsafe slugs; storage is not touched.
    /// - [`Error::ContentNotFound`] when the file is missing or resolves
    ///   outside the content directory.
    /// - I/O errors for unreadable files, including invalid UTF-8.
    /// - [`Error::MalformedFrontmatter`] for a broken header block.
    pub async fn load(&self, slug: &str) -> Result<ProjectDocument> {
        let slug = validate_slug(slug)?;
        let path = self.path_for(slug);

        if !files::exists(&path).await {
            return Err(Error::not_found(path.display().to_string()));
        }
        if !paths::is_within(&self.content_dir, &path).await {
            return Err(Error::not_found(format!(
                "{} resolves outside {}",
                path.display(),
                self.content_dir.display()
            )));
        }

        match &self.cache {
            Some(cache) => load_cached(cache, slug, &path).await,
            None => read_document(slug, &path).await,
        }
    }

    /// Slugs of every markdown document directly in the content directory,
    /// sorted. A missing content directory has no documents.
    pub async fn list_slugs(&self) -> Result<Vec<String>> {
        if !files::exists(&self.content_dir).await {
            log::debug!(
                "Content directory {} does not exist",
                self.content_dir.display()
            );
            return Ok(Vec::new());
        }
        let found =
            files::find_all_files(&self.content_dir, FindOptions::markdown().with_max_depth(1))
                .await?;
        Ok(found.into_iter().map(|f| f.stem).collect())
    }

    /// Drop every cached document.
    pub async fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.write().await.clear();
        }
    }
}

async fn read_document(slug: &str, path: &Path) -> Result<ProjectDocument> {
    let source = files::read_file(path).await?;
    ProjectDocument::parse(slug, &source)
}

async fn load_cached(cache: &Cache, slug: &str, path: &Path) -> Result<ProjectDocument> {
    let mtime = files::modified(path).await?;

    if let Some((cached_at, doc)) = cache.read().await.get(slug) {
        if *cached_at == mtime {
            log::trace!("Cache hit for '{slug}'");
            return Ok(doc.clone());
        }
    }

    let doc = read_document(slug, path).await?;
    cache
        .write()
        .await
        .insert(slug.to_string(), (mtime, doc.clone()));
    Ok(doc)
}
