//! The single-page résumé.

use folio_content::PLACEHOLDER_IMAGE;
use folio_content::view::{Element, ViewNode};
use folio_projects::ProjectRecord;

use super::{PageContext, badge, external_link, page, paragraph, section, theme_toggle};
use crate::profile::{Contact, Education, Experience, Link, Profile, TechGroup};
use crate::reveal::RevealLatch;

/// Section ids that take part in the reveal latch.
pub const REVEAL_SECTIONS: [&str; 4] = ["projects", "education", "tech-stack", "contact"];

/// Render the home page.
pub fn render(
    ctx: &PageContext,
    profile: &Profile,
    projects: &[&ProjectRecord],
    reveal: &RevealLatch,
) -> String {
    let card = Element::new("main")
        .class("card")
        .child(top_bar(ctx, profile))
        .child(hero(ctx, profile))
        .child(
            Element::new("div")
                .class("sections")
                .child(socials(profile))
                .child(section("ABOUT", vec![paragraph("about", profile.about)]))
                .child(experience(ctx, &profile.experience))
                .child(revealed(
                    reveal,
                    "projects",
                    section("PROJECTS", vec![project_grid(ctx, projects)]),
                ))
                .child(revealed(
                    reveal,
                    "education",
                    section("EDUCATION", profile.education.iter().map(education).collect()),
                ))
                .child(revealed(
                    reveal,
                    "tech-stack",
                    section("TECH STACK", profile.tech_stack.iter().map(tech_group).collect()),
                ))
                .child(revealed(
                    reveal,
                    "contact",
                    section("CONTACT", profile.contacts.iter().map(contact).collect()),
                )),
        )
        .child(
            Element::new("footer")
                .class("footer")
                .text(profile.footer),
        );

    page(ctx, profile.name, vec![card.into()])
}

fn revealed(reveal: &RevealLatch, id: &str, section: Element) -> ViewNode {
    section
        .attr("id", id)
        .class(reveal.class_for(id))
        .into()
}

fn top_bar(ctx: &PageContext, profile: &Profile) -> ViewNode {
    Element::new("header")
        .class("top-bar")
        .child(
            Element::new("span")
                .class("location")
                .text(profile.location),
        )
        .child(theme_toggle(ctx))
        .into()
}

fn hero(ctx: &PageContext, profile: &Profile) -> ViewNode {
    Element::new("div")
        .class("hero")
        .child(
            Element::new("img")
                .class("portrait")
                .attr("src", ctx.base.link(profile.portrait))
                .attr("alt", profile.name),
        )
        .child(Element::new("h1").text(profile.name))
        .child(paragraph("role", profile.role))
        .into()
}

fn socials(profile: &Profile) -> ViewNode {
    Element::new("section")
        .class("socials")
        .children(
            profile
                .socials
                .iter()
                .map(|link| ViewNode::from(external_link(link.href, link.label).class("social"))),
        )
        .into()
}

fn experience(ctx: &PageContext, positions: &[Experience]) -> ViewNode {
    section(
        "EXPERIENCE",
        positions.iter().map(|p| position(ctx, p)).collect(),
    )
    .into()
}

fn position(ctx: &PageContext, position: &Experience) -> ViewNode {
    let items = position
        .highlights
        .iter()
        .map(|h| ViewNode::from(Element::new("li").text(*h)))
        .chain(position.links.iter().map(|link: &Link| {
            ViewNode::from(
                Element::new("li")
                    .child(external_link(link.href, link.label).class("inline-link")),
            )
        }));

    Element::new("div")
        .class("position")
        .child(
            Element::new("img")
                .class("logo")
                .attr("src", ctx.base.link(position.logo))
                .attr("alt", "Company icon"),
        )
        .child(
            Element::new("div")
                .child(Element::new("h3").text(position.role))
                .child(paragraph(
                    "meta",
                    &format!("{} • {}", position.organization, position.period),
                ))
                .child(Element::new("ul").class("highlights").children(items)),
        )
        .into()
}

fn project_grid(ctx: &PageContext, projects: &[&ProjectRecord]) -> ViewNode {
    Element::new("div")
        .class("project-grid")
        .children(projects.iter().map(|p| project_card(ctx, p)))
        .into()
}

/// One project card linking to the record's `href`.
pub fn project_card(ctx: &PageContext, project: &ProjectRecord) -> ViewNode {
    let image = if project.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        project.image.as_str()
    };

    let mut body = Element::new("div")
        .class("project-body")
        .child(Element::new("h3").text(project.title.as_str()))
        .child(paragraph("project-description", &project.description));
    if !project.technologies.is_empty() {
        body = body.child(
            Element::new("div")
                .class("badges")
                .children(project.technologies.iter().map(|t| badge(t))),
        );
    }

    Element::new("a")
        .class("project-card")
        .attr("href", ctx.base.link(&project.href))
        .attr("data-project", project.id.as_str())
        .child(
            Element::new("img")
                .attr("src", ctx.base.link(image))
                .attr("alt", project.title.as_str())
                .attr("loading", "lazy"),
        )
        .child(body)
        .into()
}

fn education(entry: &Education) -> ViewNode {
    Element::new("div")
        .class("education")
        .child(Element::new("h3").text(entry.degree))
        .child(paragraph("meta", entry.school))
        .child(paragraph("meta", entry.period))
        .into()
}

fn tech_group(group: &TechGroup) -> ViewNode {
    Element::new("div")
        .class("tech-group")
        .child(Element::new("h3").text(group.title))
        .child(
            Element::new("div")
                .class("badges")
                .children(group.items.iter().map(|item| badge(item))),
        )
        .into()
}

fn contact(entry: &Contact) -> ViewNode {
    Element::new("div")
        .class("contact")
        .child(Element::new("span").text(entry.kind))
        .child(
            Element::new("a")
                .attr("href", entry.link.href)
                .text(entry.link.label),
        )
        .into()
}
