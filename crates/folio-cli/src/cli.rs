//! CLI argument parsing and command definitions.
//!
//! Global flags cover configuration and verbosity. Subcommands either serve
//! the site or inspect the registry and content directory without a server.

use clap::{Parser, Subcommand};
use folio_projects::Category;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands understood by the `folio` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// List the projects shown on the home page.
    Projects {
        /// Only list projects in this category.
        #[arg(short, long)]
        category: Option<Category>,

        /// Summarise visible projects per category instead.
        #[arg(long, conflicts_with = "category")]
        categories: bool,

        /// Print the records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the detail page for one project.
    Render {
        /// Project slug, as used in `/projects/{slug}`.
        slug: String,
    },

    /// Parse every project document and report the broken ones.
    Check,

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "server.port").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose() {
        let args = CliArgs::parse_from(["test", "--verbose"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_args_quiet() {
        let args = CliArgs::parse_from(["test", "-q"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config() {
        let args = CliArgs::parse_from(["test", "--config", "/path/to/config.toml"]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_serve_command_defaults_to_config() {
        let args = CliArgs::parse_from(["test", "serve"]);
        match args.command {
            Some(Command::Serve { port, host }) => {
                assert!(port.is_none());
                assert!(host.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_serve_command_overrides() {
        let args = CliArgs::parse_from(["test", "serve", "--port", "8080", "--host", "0.0.0.0"]);
        match args.command {
            Some(Command::Serve { port, host }) => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_serve_command_rejects_bad_port() {
        let result = CliArgs::try_parse_from(["test", "serve", "--port", "99999"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_projects_command() {
        let args = CliArgs::parse_from(["test", "projects"]);
        match args.command {
            Some(Command::Projects {
                category,
                categories,
                json,
            }) => {
                assert!(category.is_none());
                assert!(!categories);
                assert!(!json);
            }
            _ => panic!("Expected Projects command"),
        }
    }

    #[test]
    fn test_projects_command_categories_summary() {
        let args = CliArgs::parse_from(["test", "projects", "--categories"]);
        assert!(matches!(
            args.command,
            Some(Command::Projects {
                categories: true,
                ..
            })
        ));

        let conflict =
            CliArgs::try_parse_from(["test", "projects", "--categories", "--category", "work"]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_projects_command_category() {
        let args = CliArgs::parse_from(["test", "projects", "--category", "open-source", "--json"]);
        match args.command {
            Some(Command::Projects { category, json, .. }) => {
                assert_eq!(category, Some(Category::OpenSource));
                assert!(json);
            }
            _ => panic!("Expected Projects command"),
        }
    }

    #[test]
    fn test_projects_command_unknown_category() {
        let result = CliArgs::try_parse_from(["test", "projects", "--category", "hobby"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_command() {
        let args = CliArgs::parse_from(["test", "render", "tidetrack"]);
        match args.command {
            Some(Command::Render { slug }) => assert_eq!(slug, "tidetrack"),
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_render_requires_slug() {
        assert!(CliArgs::try_parse_from(["test", "render"]).is_err());
    }

    #[test]
    fn test_check_and_version_commands() {
        let args = CliArgs::parse_from(["test", "check"]);
        assert!(matches!(args.command, Some(Command::Check)));

        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Path,
            })) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn test_config_set_command() {
        let args = CliArgs::parse_from(["test", "config", "set", "server.port", "8080"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Set { key, value },
            })) => {
                assert_eq!(key, "server.port");
                assert_eq!(value, "8080");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let args = CliArgs::parse_from(["test", "config", "init", "--file", "/tmp/c.toml", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert_eq!(file.as_deref(), Some("/tmp/c.toml"));
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_export_command() {
        let args = CliArgs::parse_from(["test", "config", "export", "--docker-env"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Export { docker_env },
            })) => assert!(docker_env),
            _ => panic!("Expected Config Export command"),
        }
    }
}
