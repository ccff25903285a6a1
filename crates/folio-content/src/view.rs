//! Presentational nodes and HTML serialisation.
//!
//! [`ViewNode`] is what the markdown table produces and what the site's page
//! views are assembled from. All text and attribute values are escaped on
//! output; there is no way to inject unescaped markup through a `ViewNode`.

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// One presentational node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewNode {
    /// An HTML element.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// A sequence of nodes with no wrapper.
    Fragment(Vec<ViewNode>),
}

/// An HTML element with ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    /// Value of an attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

/// Text node shorthand.
pub fn text(text: impl Into<String>) -> ViewNode {
    ViewNode::Text(text.into())
}

impl ViewNode {
    /// Tag name for element nodes.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ViewNode::Element(e) => Some(e.tag),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Attribute value for element nodes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.get_attr(name))
    }

    /// Child nodes; text nodes have none.
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element(e) => &e.children,
            ViewNode::Fragment(nodes) => nodes,
            ViewNode::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ViewNode::Text(t) => out.push_str(t),
            _ => self.children().iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// First element with the given tag, depth first, including `self`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if let ViewNode::Element(e) = self {
            if e.tag == tag {
                return Some(e);
            }
        }
        self.children().iter().find_map(|c| c.find(tag))
    }

    /// Pass every `href` and `src` in the subtree through `rewrite`.
    pub fn rewrite_urls(&mut self, rewrite: &dyn Fn(&str) -> String) {
        let children = match self {
            ViewNode::Element(e) => {
                for (name, value) in e.attrs.iter_mut() {
                    if matches!(*name, "href" | "src") {
                        *value = rewrite(value);
                    }
                }
                &mut e.children
            }
            ViewNode::Fragment(nodes) => nodes,
            ViewNode::Text(_) => return,
        };
        children.iter_mut().for_each(|c| c.rewrite_urls(rewrite));
    }

    /// Serialise to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text(t) => escape_text(t, out),
            ViewNode::Fragment(nodes) => nodes.iter().for_each(|n| n.write_html(out)),
            ViewNode::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for (name, value) in &e.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                if e.is_void() {
                    return;
                }
                e.children.iter().for_each(|c| c.write_html(out));
                out.push_str("</");
                out.push_str(e.tag);
                out.push('>');
            }
        }
    }
}

/// Serialise a node list to HTML.
pub fn to_html(nodes: &[ViewNode]) -> String {
    let mut out = String::new();
    nodes.iter().for_each(|n| n.write_html(&mut out));
    out
}

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
