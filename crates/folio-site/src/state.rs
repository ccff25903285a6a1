//! Shared state handed to every route.

use std::path::PathBuf;
use std::sync::Arc;

use folio_content::ProjectResolver;
use folio_projects::Registry;

use crate::profile::Profile;
use crate::theme::Theme;

/// URL prefix the site is mounted under, e.g. `/portfolio`.
///
/// Stored normalised: empty for the root, otherwise a leading slash and no
/// trailing slash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// URL of the home page.
    pub fn home(&self) -> String {
        if self.is_root() {
            "/".to_string()
        } else {
            self.0.clone()
        }
    }

    /// Prefix a site-absolute path. Anything else (external URLs, relative
    /// paths) is returned unchanged.
    pub fn link(&self, path: &str) -> String {
        if path == "/" {
            self.home()
        } else if path.starts_with('/') && !path.starts_with("//") {
            format!("{}{path}", self.0)
        } else {
            path.to_string()
        }
    }
}

/// Site-wide settings.
#[derive(Clone, Debug, Default)]
pub struct SiteOptions {
    pub base_path: BasePath,
    /// Directory served for paths no route matches (images, favicon).
    pub static_dir: Option<PathBuf>,
    /// Theme when the visitor has no stored preference.
    pub default_theme: Theme,
}

impl SiteOptions {
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = BasePath::new(base_path);
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }
}

/// Everything a handler needs. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub registry: Arc<Registry>,
    pub resolver: Arc<ProjectResolver>,
    pub profile: Arc<Profile>,
    pub options: Arc<SiteOptions>,
}

impl SiteState {
    pub fn new(registry: Registry, resolver: ProjectResolver, options: SiteOptions) -> Self {
        Self {
            registry: Arc::new(registry),
            resolver: Arc::new(resolver),
            profile: Arc::new(Profile::builtin()),
            options: Arc::new(options),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Arc::new(profile);
        self
    }

    pub fn base_path(&self) -> &BasePath {
        &self.options.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalises() {
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("portfolio/").as_str(), "/portfolio");
        assert_eq!(BasePath::new(" /portfolio ").as_str(), "/portfolio");
    }

    #[test]
    fn test_links_at_root() {
        let base = BasePath::default();
        assert_eq!(base.home(), "/");
        assert_eq!(base.link("/"), "/");
        assert_eq!(base.link("/projects/tidetrack"), "/projects/tidetrack");
    }

    #[test]
    fn test_links_under_prefix() {
        let base = BasePath::new("/portfolio");
        assert_eq!(base.home(), "/portfolio");
        assert_eq!(base.link("/"), "/portfolio");
        assert_eq!(base.link("/images/a.png"), "/portfolio/images/a.png");
        assert_eq!(base.link("https://github.com/x"), "https://github.com/x");
        assert_eq!(base.link("//cdn.example/x"), "//cdn.example/x");
        assert_eq!(base.link("mailto:a@b"), "mailto:a@b");
    }

    #[test]
    fn test_options_builder() {
        let opts = SiteOptions::default()
            .with_base_path("/portfolio")
            .with_static_dir("public")
            .with_default_theme(Theme::Dark);
        assert_eq!(opts.base_path.as_str(), "/portfolio");
        assert_eq!(opts.static_dir, Some(PathBuf::from("public")));
        assert_eq!(opts.default_theme, Theme::Dark);
    }
}
