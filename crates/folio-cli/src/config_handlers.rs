//! Handler functions for config CLI commands.
//!
//! Implements `folio config {path,get,set,init,export}` and the TOML
//! dotted-key helpers they share.

use std::path::{Path, PathBuf};

use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Receives the raw `--config` path (not a loaded config) because some
/// commands (path, init) work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            let config = FolioConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = target_path(config_path)?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(not created yet; `folio config init` writes the defaults there)");
    }
    Ok(())
}

/// Print one value of the effective configuration, env overrides included.
fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let effective = toml::Value::try_from(FolioConfig::load(config_path)?)
        .map_err(|e| Error::config(e.to_string()))?;
    let value = get_nested_value(&effective, key)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;
    println!("{}", format_toml_value(value));
    Ok(())
}

/// Set a value in the config file.
///
/// The edited document must still load as a [`FolioConfig`]; otherwise the
/// file is left untouched.
fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = target_path(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `folio config init` first.",
            path.display()
        )));
    }

    let mut doc = read_document(&path)?;
    set_nested_value(&mut doc, key, parse_value(value))?;
    doc.clone()
        .try_into::<FolioConfig>()
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;
    write_document(&path, &doc)?;

    println!("{key} = {value} ({})", path.display());
    Ok(())
}

fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => FolioConfig::default_config_path()
            .ok_or_else(|| Error::config("No config directory on this platform"))?,
    };
    if path.exists() && !force {
        return Err(Error::config(format!(
            "{} already exists. Pass --force to replace it.",
            path.display()
        )));
    }

    let defaults = toml::Value::try_from(FolioConfig::default())
        .map_err(|e| Error::config(e.to_string()))?;
    write_document(&path, &defaults)?;

    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn cmd_config_export(config: &FolioConfig, docker_env: bool) -> Result<()> {
    let flag = if docker_env { "--env " } else { "" };
    for (key, value) in config.to_env_vars()? {
        println!("{flag}{key}={value}");
    }
    Ok(())
}

// ============================================================================
// Config file I/O
// ============================================================================

fn target_path(config_path: Option<&str>) -> Result<PathBuf> {
    FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("No config directory on this platform"))
}

fn read_document(path: &Path) -> Result<toml::Value> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    toml::from_str(&text)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Write `doc` to `path`, creating parent directories.
fn write_document(path: &Path, doc: &toml::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let text = toml::to_string_pretty(doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(path, text).map_err(|e| Error::io_with_path(e, path))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = match parts.pop() {
        Some(last) if !last.is_empty() => last,
        _ => return Err(Error::config("Empty key path")),
    };

    let mut current = root;
    for part in parts {
        current = current
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{part}' is not a table in '{key}'")))?
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{key}': parent is not a table")))?
        .insert(last.to_string(), value);
    Ok(())
}

/// Read a command-line value as a TOML literal, or as a bare string when it
/// is not one.
fn parse_value(s: &str) -> toml::Value {
    toml::from_str::<toml::Table>(&format!("v = {s}"))
        .ok()
        .and_then(|mut table| table.remove("v"))
        .unwrap_or_else(|| toml::Value::String(s.to_string()))
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, FolioConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = default_config_file(&dir);

        assert!(cmd_config_get(Some(path.to_str().unwrap()), "project_name").is_ok());
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "site.default_theme").is_ok());
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = default_config_file(&dir);

        let result = cmd_config_get(Some(path.to_str().unwrap()), "nonexistent.key");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = default_config_file(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "server.port", "8080").unwrap();
        cmd_config_set(Some(path.to_str().unwrap()), "site.base_path", "/portfolio").unwrap();

        let config: FolioConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.base_path, "/portfolio");
    }

    #[test]
    fn test_cmd_config_set_rejects_invalid_value() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = default_config_file(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(Some(path.to_str().unwrap()), "site.default_theme", "sepia");
        assert!(result.unwrap_err().to_string().contains("Invalid value"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set(Some("/nonexistent/config.toml"), "key", "value");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("folio").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("project_name"));
        assert!(content.contains("[server]"));
        assert!(content.contains("[site]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(Some(path.to_str().unwrap()), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(Some(path.to_str().unwrap()), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("project_name"));
    }

    #[test]
    fn test_cmd_config_export() {
        let config = FolioConfig::default();
        assert!(cmd_config_export(&config, false).is_ok());
        assert!(cmd_config_export(&config, true).is_ok());
    }

    // ------------------------------------------------------------------------
    // Dotted-key helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("name = \"x\"\n[server]\nport = 3000").unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
        assert!(get_nested_value(&val, "server.nonexistent").is_none());
        assert!(get_nested_value(&val, "name.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "server.port", toml::Value::Integer(3000)).unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
    }

    #[test]
    fn test_set_nested_value_overwrites() {
        let mut val: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        set_nested_value(&mut val, "server.port", toml::Value::Integer(8080)).unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(8080))
        );
    }

    #[test]
    fn test_set_nested_value_errors() {
        let mut val: toml::Value = toml::from_str("name = \"x\"").unwrap();
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
        assert!(set_nested_value(&mut val, "name.inner", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("false"), toml::Value::Boolean(false));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(
            parse_value("/portfolio"),
            toml::Value::String("/portfolio".to_string())
        );
        assert_eq!(
            parse_value("hello world"),
            toml::Value::String("hello world".to_string())
        );
        assert_eq!(
            parse_value("[\"a\", \"b\"]"),
            toml::Value::Array(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("dark".into())), "dark");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");

        let table: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        let server = get_nested_value(&table, "server").unwrap();
        assert!(format_toml_value(server).contains("port = 3000"));
    }
}
