//! The `folio` application.
//!
//! [`FolioCli`] owns the loaded configuration, installs logging and
//! dispatches each [`Command`] to its handler.

use std::sync::Arc;

use folio_core::Result;
use folio_projects::Registry;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::commands;
use crate::config::FolioConfig;
use crate::config_handlers;

// ============================================================================
// FolioCli
// ============================================================================

/// CLI application over a loaded [`FolioConfig`].
pub struct FolioCli {
    name: String,
    config: Arc<FolioConfig>,
    version: String,
}

impl FolioCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: FolioConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Serve { port, host }) => {
                commands::handle_serve(&self.config, host.as_deref(), port).await
            }
            Some(Command::Projects {
                categories: true,
                json,
                ..
            }) => commands::handle_categories(&Registry::builtin(), json),
            Some(Command::Projects { category, json, .. }) => {
                commands::handle_projects(&Registry::builtin(), category, json)
            }
            Some(Command::Render { slug }) => commands::handle_render(&self.config, &slug).await,
            Some(Command::Check) => commands::handle_check(&self.config).await,
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
