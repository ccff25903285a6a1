//! Frontmatter extraction.
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: TideTrack
//! year: 2024
//! technologies: [Python, React]
//! ---
//! Body markdown starts here.
//! ```
//!
//! The closing fence may also be `...`. A document without an opening fence
//! has no frontmatter and its whole text is the body. An opening fence
//! without a closing one, YAML that does not parse, or YAML that is not a
//! mapping is a malformed frontmatter error.

use folio_core::{Error, Result};
use serde::Serialize;
use yaml_serde::{Mapping, Value};

const FENCE: &str = "---";
const ALT_CLOSE: &str = "...";

/// Open key/value metadata from a document header.
///
/// No schema: absent keys are simply absent. Keys keep their document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True when the key exists, even with a null value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Scalar value as display text.
    ///
    /// Strings are returned as-is, numbers and booleans are formatted. Null,
    /// empty strings and non-scalars count as absent.
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Sequence of scalars as display text, in order.
    ///
    /// A lone scalar is treated as a one-element list. Missing keys and
    /// non-scalar elements produce nothing.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(other) => scalar_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Split a document into its raw frontmatter block and body.
///
/// Returns `Ok((None, source))` when there is no opening fence. `origin` is
/// only used in error messages.
pub fn split<'a>(source: &'a str, origin: &str) -> Result<(Option<&'a str>, &'a str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((None, source));
    };
    if first.trim_end() != FENCE {
        return Ok((None, source));
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == FENCE || trimmed == ALT_CLOSE {
            let block = &source[block_start..offset];
            let body = &source[offset + line.len()..];
            return Ok((Some(block), body));
        }
        offset += line.len();
    }

    Err(Error::malformed_frontmatter(
        origin,
        "opening '---' fence has no closing fence",
    ))
}

/// Parse a document into frontmatter and body.
///
/// # Errors
///
/// Returns [`Error::MalformedFrontmatter`] when a fenced block is present
/// but is not a YAML mapping with string keys.
pub fn parse(source: &str, origin: &str) -> Result<(Frontmatter, String)> {
    let (block, body) = split(source, origin)?;
    let frontmatter = match block {
        None => Frontmatter::default(),
        Some(block) => parse_block(block, origin)?,
    };
    Ok((frontmatter, body.to_string()))
}

fn parse_block(block: &str, origin: &str) -> Result<Frontmatter> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    let value: Value = yaml_serde::from_str(block)
        .map_err(|e| Error::malformed_frontmatter(origin, e.to_string()))?;

    match value {
        Value::Null => Ok(Frontmatter::default()),
        Value::Mapping(mapping) => {
            if let Some(bad) = mapping.keys().find(|k| !k.is_string()) {
                return Err(Error::malformed_frontmatter(
                    origin,
                    format!("non-string key {bad:?}"),
                ));
            }
            Ok(Frontmatter(mapping))
        }
        _ => Err(Error::malformed_frontmatter(
            origin,
            "expected a key/value mapping",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_year() {
        let source = "---\ntitle: \"X\"\nyear: 2024\n---\nHello\n";
        let (fm, body) = parse(source, "x.md").unwrap();
        assert_eq!(fm.get_text("title").as_deref(), Some("X"));
        assert_eq!(fm.get("year").and_then(Value::as_i64), Some(2024));
        assert_eq!(fm.get_text("year").as_deref(), Some("2024"));
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn test_no_frontmatter_is_all_body() {
        let source = "# Just markdown\n\n---\n\nwith a rule";
        let (fm, body) = parse(source, "plain.md").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, source);
    }

    #[test]
    fn test_empty_document() {
        let (fm, body) = parse("", "empty.md").unwrap();
        assert!(fm.is_empty());
        assert!(body.is_empty());
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = parse("---\n---\nBody", "e.md").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_and_bom() {
        let source = "\u{feff}---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = parse(source, "crlf.md").unwrap();
        assert_eq!(fm.get_text("title").as_deref(), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_dots_close_fence() {
        let (fm, body) = parse("---\ntitle: Dots\n...\nBody", "d.md").unwrap();
        assert_eq!(fm.get_text("title").as_deref(), Some("Dots"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unclosed_fence_is_malformed() {
        let err = parse("---\ntitle: Open\nBody", "open.md").unwrap_err();
        assert!(matches!(err, Error::MalformedFrontmatter { .. }));
        assert!(err.to_string().contains("open.md"));
    }

    #[test]
    fn test_invalid_yaml_is_malformed() {
        let err = parse("---\ntitle: [unclosed\n---\n", "bad.md").unwrap_err();
        assert!(matches!(err, Error::MalformedFrontmatter { .. }));
    }

    #[test]
    fn test_non_mapping_is_malformed() {
        let err = parse("---\n- a\n- b\n---\n", "list.md").unwrap_err();
        assert!(err.to_string().contains("expected a key/value mapping"));
    }

    #[test]
    fn test_non_string_key_is_malformed() {
        let err = parse("---\n2024: year\n---\n", "key.md").unwrap_err();
        assert!(err.to_string().contains("non-string key"));
    }

    #[test]
    fn test_get_list() {
        let source = "---\ntechnologies: [Rust, Axum, Rust]\nsolo: Tokio\nnested: [{a: 1}, x]\n---\n";
        let (fm, _) = parse(source, "list.md").unwrap();
        assert_eq!(fm.get_list("technologies"), vec!["Rust", "Axum", "Rust"]);
        assert_eq!(fm.get_list("solo"), vec!["Tokio"]);
        assert_eq!(fm.get_list("nested"), vec!["x"]);
        assert!(fm.get_list("missing").is_empty());
    }

    #[test]
    fn test_get_text_treats_blank_and_null_as_absent() {
        let (fm, _) = parse("---\nliveUrl:\ngithubUrl: \"\"\n---\n", "n.md").unwrap();
        assert!(fm.contains_key("liveUrl"));
        assert!(fm.get_text("liveUrl").is_none());
        assert!(fm.get_text("githubUrl").is_none());
    }

    #[test]
    fn test_keys_preserve_order() {
        let (fm, _) = parse("---\nzeta: 1\nalpha: 2\n---\n", "o.md").unwrap();
        assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn test_fence_must_be_first_line() {
        let source = "\n---\ntitle: Late\n---\n";
        let (fm, body) = parse(source, "late.md").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, source);
    }
}
