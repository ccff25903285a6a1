//! Markdown parsing, frontmatter extraction, and project document resolution.
//!
//! # Features
//!
//! - Frontmatter extraction from markdown files
//! - Markdown to presentational nodes through a fixed rendering table
//! - Slug-keyed document lookup that never leaves the content directory

#![doc = include_str!("../README.md")]

pub mod document;
pub mod frontmatter;
pub mod markdown;
pub mod resolver;
pub mod view;

pub use document::{ProjectDocument, ProjectMeta};
pub use frontmatter::Frontmatter;
pub use markdown::{render, render_html, render_linked, PLACEHOLDER_IMAGE};
pub use resolver::{validate_slug, ProjectResolver};
pub use view::{Element, ViewNode};
