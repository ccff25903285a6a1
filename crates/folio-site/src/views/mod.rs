//! HTML page views.
//!
//! Views build [`ViewNode`] trees and serialise them once, at the end, in
//! [`page`]. They take everything they show as arguments and never touch
//! storage.

pub mod home;
pub mod not_found;
pub mod project;

use folio_content::view::{Element, ViewNode, text};

use crate::state::BasePath;
use crate::theme::Theme;

/// Stylesheet served at [`STYLESHEET_PATH`].
pub const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Site-relative path of the stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Rel value for links that leave the site.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Per-request rendering context.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub theme: Theme,
    pub base: BasePath,
}

impl PageContext {
    pub fn new(theme: Theme, base: BasePath) -> Self {
        Self { theme, base }
    }
}

/// Wrap body nodes in the document shell and serialise.
pub fn page(ctx: &PageContext, title: &str, body: Vec<ViewNode>) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", ctx.base.link(STYLESHEET_PATH)),
        );

    let html = Element::new("html")
        .attr("lang", "en")
        .class(ctx.theme.as_str())
        .child(head)
        .child(Element::new("body").children(body));

    let mut out = String::from("<!DOCTYPE html>\n");
    ViewNode::from(html).write_html(&mut out);
    out
}

/// Form that flips the theme and comes back to the current page.
pub fn theme_toggle(ctx: &PageContext) -> ViewNode {
    let label = if ctx.theme.is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };
    Element::new("form")
        .class("theme-toggle")
        .attr("method", "post")
        .attr("action", ctx.base.link("/theme"))
        .child(
            Element::new("button")
                .attr("type", "submit")
                .attr("aria-label", "Toggle dark mode")
                .text(label),
        )
        .into()
}

/// "Back to Resume" link to the home page.
pub fn back_link(ctx: &PageContext) -> ViewNode {
    Element::new("a")
        .class("back-link")
        .attr("href", ctx.base.home())
        .text("← Back to Resume")
        .into()
}

/// Link opening in a new, isolated browsing context.
pub fn external_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", EXTERNAL_REL)
        .text(label)
}

/// Pill-shaped label.
pub fn badge(label: &str) -> ViewNode {
    Element::new("span").class("badge").text(label).into()
}

/// A section with an uppercase heading.
pub fn section(title: &str, children: Vec<ViewNode>) -> Element {
    Element::new("section")
        .child(Element::new("h2").class("section-title").text(title))
        .children(children)
}

pub(crate) fn paragraph(class: &str, content: &str) -> ViewNode {
    Element::new("p").class(class).child(text(content)).into()
}
