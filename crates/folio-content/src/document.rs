//! Parsed project documents.

use folio_core::Result;
use serde::Serialize;

use crate::frontmatter::{self, Frontmatter};
use crate::markdown;
use crate::view::ViewNode;

/// A project detail document: `<slug>.md` split into metadata and body.
///
/// The slug is the document's only identity; nothing ties it to a registry
/// record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectDocument {
    pub slug: String,
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Typed view over the frontmatter keys the detail page knows about.
///
/// Every field is optional; an absent key suppresses its UI element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectMeta {
    pub title: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
}

impl ProjectDocument {
    /// Parse raw document text.
    ///
    /// # Errors
    ///
    /// Returns a malformed frontmatter error if the header block is broken.
    pub fn parse(slug: impl Into<String>, source: &str) -> Result<Self> {
        let slug = slug.into();
        let (frontmatter, body) = frontmatter::parse(source, &format!("{slug}.md"))?;
        Ok(Self {
            slug,
            frontmatter,
            body,
        })
    }

    /// The recognised frontmatter keys.
    pub fn meta(&self) -> ProjectMeta {
        let fm = &self.frontmatter;
        ProjectMeta {
            title: fm.get_text("title"),
            year: fm.get_text("year"),
            description: fm.get_text("description"),
            live_url: fm.get_text("liveUrl"),
            github_url: fm.get_text("githubUrl"),
            technologies: fm.get_list("technologies"),
        }
    }

    /// Page title: the `title` key, or the slug when it is missing.
    pub fn display_title(&self) -> String {
        self.frontmatter
            .get_text("title")
            .unwrap_or_else(|| self.slug.clone())
    }

    /// Body rendered through the markdown table.
    pub fn render_body(&self) -> Vec<ViewNode> {
        markdown::render(&self.body)
    }

    /// Body rendered with link and image URLs passed through `link`.
    pub fn render_body_linked(&self, link: &dyn Fn(&str) -> String) -> Vec<ViewNode> {
        markdown::render_linked(&self.body, link)
    }
}
