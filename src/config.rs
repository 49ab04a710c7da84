//! User configuration for the `changeset` binary.
//!
//! Settings live in `<config dir>/changeset/config.toml`, or in a file passed
//! with `--config`.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ChangesetError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    /// Print each file's unified diff after its summary line.
    pub show_diff: bool,
}

/// Platform config path, e.g. `~/.config/changeset/config.toml` on Linux.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "changeset").map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn parse(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| ChangesetError::Config(e.to_string()))
}

/// Load `explicit` if given, otherwise the default config file. A missing
/// default file yields the defaults; a missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Config::default()),
        },
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| ChangesetError::Config(format!("{}: {e}", path.display())))?;

    parse(&contents).map_err(|e| match e {
        ChangesetError::Config(msg) => ChangesetError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_diff);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse(r#"format = "json""#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_diff);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse("colour = true").unwrap_err();
        assert!(matches!(err, ChangesetError::Config(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_diff = true\n").unwrap();

        let config = load(Some(&path)).unwrap();

        assert!(config.show_diff);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();

        assert!(matches!(err, ChangesetError::Config(msg) if msg.contains("absent.toml")));
    }
}
