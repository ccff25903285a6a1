//! Markdown to presentational nodes.
//!
//! Rendering happens in two steps:
//!
//! 1. [`parse`] turns markdown into a small syntax tree of [`MdNode`]s using
//!    pulldown-cmark with tables and strikethrough enabled.
//! 2. [`present`] maps every node through [`RENDER_TABLE`], a fixed table of
//!    node kind → rule. Each rule is a pure function from a node (and its
//!    already-presented children) to a [`ViewNode`].
//!
//! Two rules carry security weight. Links and images always get
//! `target="_blank"` and `rel="noopener noreferrer"`, and `javascript:` style
//! URLs are neutralised. Raw HTML in the source is shown as literal text.
//!
//! Rendering is total: anything the parser accepts maps to some output.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::view::{self, Element, ViewNode};

/// Image used when a markdown image has no usable source.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// `rel` value for every outbound link.
pub const LINK_REL: &str = "noopener noreferrer";

/// Markdown node kinds known to the rendering table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Heading(u8),
    Paragraph,
    BlockQuote,
    CodeBlock,
    HtmlBlock,
    BulletList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableRow,
    TableHeaderCell,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    Text,
    InlineCode,
    InlineHtml,
    SoftBreak,
    HardBreak,
    Rule,
    /// Containers the table has no rule for; their children still render.
    Unsupported,
}

/// A node in the parsed markdown tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MdNode {
    pub kind: NodeKind,
    /// Text for leaves (text, inline code, inline HTML).
    pub literal: String,
    /// Link destination or image source.
    pub url: String,
    /// Link or image title.
    pub title: String,
    /// Code block info string (language).
    pub info: String,
    /// Ordered list start number.
    pub start: Option<u64>,
    pub children: Vec<MdNode>,
}

impl MdNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            literal: String::new(),
            url: String::new(),
            title: String::new(),
            info: String::new(),
            start: None,
            children: Vec::new(),
        }
    }

    fn leaf(kind: NodeKind, literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            ..Self::new(kind)
        }
    }

    /// Concatenated literal text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = self.literal.clone();
        for child in &self.children {
            out.push_str(&child.plain_text());
        }
        out
    }
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn open(tag: Tag<'_>, in_table_head: bool) -> MdNode {
    match tag {
        Tag::Paragraph => MdNode::new(NodeKind::Paragraph),
        Tag::Heading { level, .. } => MdNode::new(NodeKind::Heading(heading_number(level))),
        Tag::BlockQuote(_) => MdNode::new(NodeKind::BlockQuote),
        Tag::CodeBlock(kind) => {
            let mut node = MdNode::new(NodeKind::CodeBlock);
            if let CodeBlockKind::Fenced(info) = kind {
                node.info = info
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();
            }
            node
        }
        Tag::HtmlBlock => MdNode::new(NodeKind::HtmlBlock),
        Tag::List(None) => MdNode::new(NodeKind::BulletList),
        Tag::List(Some(start)) => MdNode {
            start: Some(start),
            ..MdNode::new(NodeKind::OrderedList)
        },
        Tag::Item => MdNode::new(NodeKind::ListItem),
        Tag::Table(_) => MdNode::new(NodeKind::Table),
        Tag::TableHead => MdNode::new(NodeKind::TableHead),
        Tag::TableRow => MdNode::new(NodeKind::TableRow),
        Tag::TableCell if in_table_head => MdNode::new(NodeKind::TableHeaderCell),
        Tag::TableCell => MdNode::new(NodeKind::TableCell),
        Tag::Emphasis => MdNode::new(NodeKind::Emphasis),
        Tag::Strong => MdNode::new(NodeKind::Strong),
        Tag::Strikethrough => MdNode::new(NodeKind::Strikethrough),
        Tag::Link {
            dest_url, title, ..
        } => MdNode {
            url: dest_url.to_string(),
            title: title.to_string(),
            ..MdNode::new(NodeKind::Link)
        },
        Tag::Image {
            dest_url, title, ..
        } => MdNode {
            url: dest_url.to_string(),
            title: title.to_string(),
            ..MdNode::new(NodeKind::Image)
        },
        _ => MdNode::new(NodeKind::Unsupported),
    }
}

fn close(stack: &mut Vec<MdNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(node) = stack.pop() {
        push_child(stack, node);
    }
}

fn push_child(stack: &mut [MdNode], node: MdNode) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    // pulldown-cmark may split one run of text into several events
    if node.kind == NodeKind::Text {
        if let Some(last) = parent.children.last_mut() {
            if last.kind == NodeKind::Text {
                last.literal.push_str(&node.literal);
                return;
            }
        }
    }
    parent.children.push(node);
}

/// Parse markdown into a tree rooted at a [`NodeKind::Document`] node.
pub fn parse(body: &str) -> MdNode {
    let mut stack = vec![MdNode::new(NodeKind::Document)];
    let mut in_table_head = false;

    for event in Parser::new_ext(body, options()) {
        match event {
            Event::Start(tag) => {
                let node = open(tag, in_table_head);
                if node.kind == NodeKind::TableHead {
                    in_table_head = true;
                }
                stack.push(node);
            }
            Event::End(end) => {
                if end == TagEnd::TableHead {
                    in_table_head = false;
                }
                close(&mut stack);
            }
            Event::Text(t) => push_child(&mut stack, MdNode::leaf(NodeKind::Text, t.to_string())),
            Event::Code(t) => push_child(&mut stack, MdNode::leaf(NodeKind::InlineCode, t.to_string())),
            Event::Html(t) | Event::InlineHtml(t) => {
                push_child(&mut stack, MdNode::leaf(NodeKind::InlineHtml, t.to_string()))
            }
            Event::SoftBreak => push_child(&mut stack, MdNode::new(NodeKind::SoftBreak)),
            Event::HardBreak => push_child(&mut stack, MdNode::new(NodeKind::HardBreak)),
            Event::Rule => push_child(&mut stack, MdNode::new(NodeKind::Rule)),
            _ => {}
        }
    }

    while stack.len() > 1 {
        close(&mut stack);
    }
    stack
        .pop()
        .unwrap_or_else(|| MdNode::new(NodeKind::Document))
}

// ============================================================================
// Rendering table
// ============================================================================

/// A rendering rule: node plus presented children → presentational node.
pub type Rule = fn(&MdNode, Vec<ViewNode>) -> ViewNode;

/// Node kind → rendering rule.
///
/// Kinds missing from the table fall back to [`fragment`], which renders the
/// children without a wrapper.
pub static RENDER_TABLE: &[(NodeKind, Rule)] = &[
    (NodeKind::Document, fragment),
    (NodeKind::Heading(1), heading_1),
    (NodeKind::Heading(2), heading_2),
    (NodeKind::Heading(3), heading_3),
    (NodeKind::Heading(4), minor_heading),
    (NodeKind::Heading(5), minor_heading),
    (NodeKind::Heading(6), minor_heading),
    (NodeKind::Paragraph, paragraph),
    (NodeKind::BlockQuote, block_quote),
    (NodeKind::CodeBlock, code_block),
    (NodeKind::HtmlBlock, html_block),
    (NodeKind::BulletList, bullet_list),
    (NodeKind::OrderedList, ordered_list),
    (NodeKind::ListItem, list_item),
    (NodeKind::Table, table),
    (NodeKind::TableHead, table_head),
    (NodeKind::TableRow, table_row),
    (NodeKind::TableHeaderCell, table_header_cell),
    (NodeKind::TableCell, table_cell),
    (NodeKind::Emphasis, emphasis),
    (NodeKind::Strong, strong),
    (NodeKind::Strikethrough, strikethrough),
    (NodeKind::Link, link),
    (NodeKind::Image, image),
    (NodeKind::Text, literal_text),
    (NodeKind::InlineCode, inline_code),
    (NodeKind::InlineHtml, literal_text),
    (NodeKind::SoftBreak, soft_break),
    (NodeKind::HardBreak, hard_break),
    (NodeKind::Rule, rule),
];

/// Look up the rule for a node kind.
pub fn rule_for(kind: NodeKind) -> Rule {
    RENDER_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, rule)| *rule)
        .unwrap_or(fragment)
}

/// Present one node and its subtree.
pub fn present(node: &MdNode) -> ViewNode {
    let children = node.children.iter().map(present).collect();
    rule_for(node.kind)(node, children)
}

/// Render markdown to a list of top-level presentational nodes.
pub fn render(body: &str) -> Vec<ViewNode> {
    parse(body).children.iter().map(present).collect()
}

/// Render markdown, passing every link and image URL through `link`.
///
/// Used to mount site-absolute paths such as [`PLACEHOLDER_IMAGE`] under a
/// URL prefix.
pub fn render_linked(body: &str, link: &dyn Fn(&str) -> String) -> Vec<ViewNode> {
    let mut nodes = render(body);
    nodes.iter_mut().for_each(|n| n.rewrite_urls(link));
    nodes
}

/// Render markdown straight to HTML.
pub fn render_html(body: &str) -> String {
    view::to_html(&render(body))
}

fn wrap(tag: &'static str, class: &str, children: Vec<ViewNode>) -> ViewNode {
    Element::new(tag).class(class).children(children).into()
}

fn fragment(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    ViewNode::Fragment(children)
}

fn heading_1(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("h1", "md-h1", children)
}

fn heading_2(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("h2", "md-h2", children)
}

fn heading_3(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("h3", "md-h3", children)
}

fn minor_heading(node: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    let tag = match node.kind {
        NodeKind::Heading(4) => "h4",
        NodeKind::Heading(5) => "h5",
        _ => "h6",
    };
    wrap(tag, "md-heading", children)
}

fn paragraph(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("p", "md-p", children)
}

fn block_quote(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("blockquote", "md-blockquote", children)
}

fn code_block(node: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    let language = (!node.info.is_empty()).then(|| format!("language-{}", node.info));
    let code = Element::new("code")
        .attr_opt("class", language)
        .text(node.plain_text());
    Element::new("pre").class("md-pre").child(code).into()
}

fn html_block(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("p", "md-p md-raw", children)
}

fn bullet_list(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("ul", "md-ul", children)
}

fn ordered_list(node: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    let start = node.start.filter(|s| *s != 1).map(|s| s.to_string());
    Element::new("ol")
        .class("md-ol")
        .attr_opt("start", start)
        .children(children)
        .into()
}

fn list_item(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("li", "md-li", children)
}

fn table(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    let (head, rows): (Vec<_>, Vec<_>) = children
        .into_iter()
        .partition(|c| c.tag() == Some("thead"));
    let mut table = Element::new("table").class("md-table").children(head);
    if !rows.is_empty() {
        table = table.child(Element::new("tbody").children(rows));
    }
    Element::new("div").class("md-table-wrap").child(table).into()
}

fn table_head(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    Element::new("thead")
        .child(Element::new("tr").children(children))
        .into()
}

fn table_row(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    Element::new("tr").children(children).into()
}

fn table_header_cell(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("th", "md-th", children)
}

fn table_cell(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    wrap("td", "md-td", children)
}

fn emphasis(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    Element::new("em").children(children).into()
}

fn strong(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    Element::new("strong").children(children).into()
}

fn strikethrough(_: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    Element::new("del").children(children).into()
}

fn link(node: &MdNode, children: Vec<ViewNode>) -> ViewNode {
    let title = (!node.title.is_empty()).then(|| node.title.clone());
    Element::new("a")
        .class("md-a")
        .attr("href", safe_link_url(&node.url))
        .attr_opt("title", title)
        .attr("target", "_blank")
        .attr("rel", LINK_REL)
        .children(children)
        .into()
}

fn image(node: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    let src = safe_image_url(&node.url);
    let title = (!node.title.is_empty()).then(|| node.title.clone());
    let img = Element::new("img")
        .class("md-img")
        .attr("src", src.clone())
        .attr("alt", node.plain_text())
        .attr_opt("title", title)
        .attr("loading", "lazy")
        .attr("referrerpolicy", "no-referrer");
    Element::new("a")
        .class("md-img-link")
        .attr("href", src)
        .attr("target", "_blank")
        .attr("rel", LINK_REL)
        .child(img)
        .into()
}

fn literal_text(node: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    ViewNode::Text(node.literal.clone())
}

fn inline_code(node: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    Element::new("code")
        .class("md-code")
        .text(node.literal.clone())
        .into()
}

fn soft_break(_: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    ViewNode::Text("\n".to_string())
}

fn hard_break(_: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    Element::new("br").into()
}

fn rule(_: &MdNode, _: Vec<ViewNode>) -> ViewNode {
    Element::new("hr").class("md-hr").into()
}

// ============================================================================
// URL hygiene
// ============================================================================

fn scheme_of(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take_while(|c| *c != '/' && *c != '?' && *c != '#')
        .collect();
    cleaned
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
}

fn is_script_scheme(scheme: &str) -> bool {
    matches!(scheme, "javascript" | "vbscript")
}

/// Link destination with script URLs replaced by `#`.
fn safe_link_url(url: &str) -> String {
    match scheme_of(url) {
        Some(scheme) if is_script_scheme(&scheme) || scheme == "data" => "#".to_string(),
        _ => url.trim().to_string(),
    }
}

/// Image source, falling back to [`PLACEHOLDER_IMAGE`] when empty or unsafe.
fn safe_image_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    match scheme_of(url) {
        Some(scheme) if is_script_scheme(&scheme) => PLACEHOLDER_IMAGE.to_string(),
        Some(scheme) if scheme == "data" && !url.to_ascii_lowercase().starts_with("data:image/") => {
            PLACEHOLDER_IMAGE.to_string()
        }
        _ => url.to_string(),
    }
}
