//! Project records and categories.

use std::fmt;
use std::str::FromStr;

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Informational grouping of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Personal,
    Work,
    Academic,
    OpenSource,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Academic,
        Category::OpenSource,
    ];

    /// The kebab-case name used in config, URLs and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Academic => "academic",
            Category::OpenSource => "open-source",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Academic => "Academic",
            Category::OpenSource => "Open Source",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_data(format!(
                    "unknown category '{s}' (expected one of: personal, work, academic, open-source)"
                ))
            })
    }
}

/// One entry in the project registry.
///
/// `id` is expected to be unique across a registry; nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable key.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Thumbnail path or URL, passed through to the asset server untouched.
    pub image: String,
    /// Destination: an internal detail route or an external URL.
    pub href: String,
    /// Informational grouping.
    pub category: Category,
    /// Technology tags, rendered verbatim and in order.
    pub technologies: Vec<String>,
    /// Whether the record is listed on the home page.
    pub visible: bool,
    /// GitHub account the project lives under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_account: Option<String>,
    /// Repository name under `github_account`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
    /// Secondary link such as a paper or write-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl ProjectRecord {
    /// Create a visible record with empty display fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            href: String::new(),
            category,
            technologies: Vec::new(),
            visible: true,
            github_account: None,
            repo_name: None,
            external_link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_repo(mut self, account: impl Into<String>, repo: impl Into<String>) -> Self {
        self.github_account = Some(account.into());
        self.repo_name = Some(repo.into());
        self
    }

    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    /// Mark the record as hidden from the home page.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Repository URL, when both account and repo are known.
    pub fn repo_url(&self) -> Option<String> {
        match (&self.github_account, &self.repo_name) {
            (Some(account), Some(repo)) => Some(format!("https://github.com/{account}/{repo}")),
            _ => None,
        }
    }
}
