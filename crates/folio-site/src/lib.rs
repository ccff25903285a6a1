//! HTTP surface of the portfolio site.
//!
//! # Routes
//!
//! | Method | Path               | Response                                   |
//! |--------|--------------------|--------------------------------------------|
//! | GET    | `/`                | Résumé page with the visible project cards |
//! | GET    | `/projects/{slug}` | Project detail page, or 404 "not found"    |
//! | POST   | `/theme`           | Flip the theme cookie, 303 back            |
//! | GET    | `/health`          | `ok`                                       |
//! | GET    | `/assets/site.css` | Bundled stylesheet                         |
//!
//! Anything else is served from the static directory when one is configured
//! and otherwise gets the not-found page. All paths sit under the configured
//! base path.

#![doc = include_str!("../README.md")]

pub mod profile;
pub mod reveal;
pub mod server;
pub mod state;
pub mod theme;
pub mod views;

pub use profile::Profile;
pub use reveal::RevealLatch;
pub use server::{create_router, run_server};
pub use state::{BasePath, SiteOptions, SiteState};
pub use theme::{CookiePreferences, MemoryPreferences, PreferenceStore, Theme};
