//! Light/dark theme and where the choice is remembered.
//!
//! The theme is plain data handed to every view. Persistence goes through
//! [`PreferenceStore`]: [`CookiePreferences`] over HTTP, and
//! [`MemoryPreferences`] in tests and tools.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use folio_core::Error;
use serde::{Deserialize, Serialize};

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// One year.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Colour scheme of the rendered pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::invalid_data(format!(
                "unknown theme '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

/// String key/value preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    /// Stored theme, or `default` when nothing valid is stored.
    fn theme_or(&self, default: Theme) -> Theme {
        self.get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn set_theme(&mut self, theme: Theme) {
        self.set(THEME_KEY, theme.as_str());
    }
}

/// In-memory preferences.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Preferences read from a request's `Cookie` headers.
///
/// Writes are collected and turned into `Set-Cookie` values with
/// [`CookiePreferences::set_cookie_headers`].
#[derive(Clone, Debug, Default)]
pub struct CookiePreferences {
    values: HashMap<String, String>,
    pending: Vec<(String, String)>,
    path: String,
}

impl CookiePreferences {
    /// Parse every `Cookie` header. Malformed pairs are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let values = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self {
            values,
            pending: Vec::new(),
            path: "/".to_string(),
        }
    }

    /// Cookie `Path` for written values.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// `Set-Cookie` header values for everything written since parsing.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|(name, value)| {
                format!(
                    "{name}={value}; Path={}; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
                    self.path
                )
            })
            .collect()
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.pending.retain(|(name, _)| name != key);
        self.pending.push((key.to_string(), value.to_string()));
    }
}
