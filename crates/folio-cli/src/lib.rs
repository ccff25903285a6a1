//! Command-line interface for Folio sites.
//!
//! # Key Abstractions
//!
//! - [`FolioCli`]: loads configuration, installs logging and dispatches commands
//! - [`FolioConfig`]: file, environment and default configuration layers

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;

pub use app::FolioCli;
pub use cli::{CliArgs, Command};
pub use config::FolioConfig;
