//! Configuration for the `folio` binary.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_*` environment variables are layered over whichever file is found.

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use confyg::{Confygery, env};
use folio_content::ProjectResolver;
use folio_core::traits::{ConfigProvider, PROJECTS_CONTENT};
use folio_core::util::paths::expand_tilde;
use folio_core::{Error, Result};
use folio_site::{SiteOptions, Theme};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `folio` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, used for log lines and default paths.
    pub project_name: String,

    /// Base path for all site data.
    pub base_path: Option<String>,

    /// Project document configuration.
    pub content: ContentConfig,

    /// Server configuration.
    pub server: ServerConfig,

    /// Rendering options for the site itself.
    pub site: SiteConfig,
}

/// Project document configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<slug>.md` files.
    pub path: Option<String>,

    /// Keep parsed documents in memory until their file changes.
    #[serde(deserialize_with = "from_str_or_native")]
    pub cache: bool,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(deserialize_with = "from_str_or_native")]
    pub port: u16,

    /// Host address to bind to.
    pub host: String,
}

/// Site rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix the site is mounted under, e.g. `/portfolio`.
    pub base_path: String,

    /// Directory served for images and other assets.
    pub static_dir: Option<String>,

    /// Theme used when the visitor has no stored preference.
    pub default_theme: Theme,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}

/// Accept either a native TOML value or its string form.
///
/// Environment overrides always arrive as strings.
fn from_str_or_native<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Native(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Native(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("server");
        env_opts.add_section("site");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `FOLIO_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, "FOLIO", &mut vars);
        Ok(vars)
    }

    /// Address to bind, with optional command-line overrides.
    pub fn socket_addr(&self, host: Option<&str>, port: Option<u16>) -> Result<SocketAddr> {
        let host = host.unwrap_or(&self.server.host);
        let ip: IpAddr = host
            .parse()
            .map_err(|e| Error::config(format!("Invalid server host '{host}': {e}")))?;
        Ok(SocketAddr::new(ip, port.unwrap_or(self.server.port)))
    }

    /// Options for the site router.
    pub fn site_options(&self) -> SiteOptions {
        let mut options = SiteOptions::default()
            .with_base_path(&self.site.base_path)
            .with_default_theme(self.site.default_theme);
        if let Some(dir) = &self.site.static_dir {
            options = options.with_static_dir(expand_tilde(dir));
        }
        options
    }

    /// Resolver over the configured project directory.
    pub fn resolver(&self) -> Result<ProjectResolver> {
        Ok(ProjectResolver::from_config(self)?.with_cache(self.content.cache))
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) if content_type == PROJECTS_CONTENT => Ok(expand_tilde(p)),
            _ => Ok(self.base_path()?.join("content").join(content_type)),
        }
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => {
            out.push((prefix.to_string(), s.clone()));
        }
        toml::Value::Integer(i) => {
            out.push((prefix.to_string(), i.to_string()));
        }
        toml::Value::Float(f) => {
            out.push((prefix.to_string(), f.to_string()));
        }
        toml::Value::Boolean(b) => {
            out.push((prefix.to_string(), b.to_string()));
        }
        toml::Value::Datetime(dt) => {
            out.push((prefix.to_string(), dt.to_string()));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
