//! Fallback view for unknown projects and paths.

use folio_content::view::Element;

use super::{PageContext, back_link, page};

pub const HEADING: &str = "Project Not Found";

/// Render the not-found page: a heading and a single way back.
pub fn render(ctx: &PageContext) -> String {
    let main = Element::new("main")
        .class("not-found")
        .child(Element::new("h1").text(HEADING))
        .child(back_link(ctx));
    page(ctx, HEADING, vec![main.into()])
}
