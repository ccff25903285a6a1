//! Project detail page.

use folio_content::ProjectDocument;
use folio_content::view::{Element, ViewNode};

use super::{PageContext, back_link, badge, external_link, page, paragraph, theme_toggle};

/// Render a resolved project document.
///
/// Header elements whose frontmatter key is absent are left out.
pub fn render(ctx: &PageContext, doc: &ProjectDocument) -> String {
    let meta = doc.meta();
    let title = doc.display_title();

    let mut title_row = Element::new("div")
        .class("title-row")
        .child(Element::new("h1").class("project-title").text(title.as_str()));
    if let Some(year) = &meta.year {
        title_row = title_row.child(badge(year));
    }

    let mut header = Element::new("header")
        .class("project-header")
        .child(title_row);
    if let Some(description) = &meta.description {
        header = header.child(paragraph("project-lead", description));
    }

    let actions: Vec<ViewNode> = [
        meta.live_url.as_deref().map(|url| ("View Live", url, "button")),
        meta.github_url
            .as_deref()
            .map(|url| ("View Code", url, "button outline")),
    ]
    .into_iter()
    .flatten()
    .map(|(label, url, class)| external_link(url, label).class(class).into())
    .collect();
    if !actions.is_empty() {
        header = header.child(Element::new("div").class("actions").children(actions));
    }

    if !meta.technologies.is_empty() {
        header = header.child(
            Element::new("div")
                .class("badges")
                .children(meta.technologies.iter().map(|t| badge(t))),
        );
    }

    let body = Element::new("article")
        .class("md-body")
        .children(doc.render_body_linked(&|url: &str| ctx.base.link(url)));

    let main = Element::new("main")
        .class("project")
        .child(
            Element::new("nav")
                .class("project-nav")
                .child(back_link(ctx))
                .child(theme_toggle(ctx)),
        )
        .child(header)
        .child(body);

    page(ctx, &title, vec![main.into()])
}
