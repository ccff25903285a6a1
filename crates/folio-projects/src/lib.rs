//! Project registry for the portfolio home page.
//!
//! # Key Abstractions
//!
//! - [`ProjectRecord`]: one entry in the registry
//! - [`Category`]: the informational grouping of a record
//! - [`Registry`]: the ordered, immutable table plus its filters
//! - [`builtin`]: the table compiled into the site

#![doc = include_str!("../README.md")]

pub mod builtin;
pub mod record;
pub mod registry;

pub use record::{Category, ProjectRecord};
pub use registry::{CategoryInfo, Registry};
