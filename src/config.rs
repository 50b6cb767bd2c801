//! Configuration file support for patroller.
//!
//! Provides YAML-based configuration through `patroller.config.yml` files
//! and the merge of file settings with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::process::PackageManagerKind;
use crate::adapters::outbound::scanners::ScanOptions;
use crate::application::dto::PatrolFlags;
use crate::shared::error::PatrolError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "patroller.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_manager: Option<String>,
    pub ignore_unused: Option<Vec<String>>,
    pub ignore_dirs: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub package_manager: PackageManagerKind,
    pub scan_options: ScanOptions,
}

impl Settings {
    /// `--yarn` wins over the config file; the config file wins over the npm default.
    pub fn resolve(config: Option<&ConfigFile>, flags: &PatrolFlags) -> Result<Self> {
        let configured = match config.and_then(|c| c.package_manager.as_deref()) {
            Some(name) => name
                .parse::<PackageManagerKind>()
                .map_err(|message| PatrolError::Config { message })?,
            None => PackageManagerKind::default(),
        };
        let package_manager = if flags.yarn {
            PackageManagerKind::Yarn
        } else {
            configured
        };

        let scan_options = ScanOptions {
            ignore_unused: config
                .and_then(|c| c.ignore_unused.clone())
                .unwrap_or_default(),
            ignore_dirs: config
                .and_then(|c| c.ignore_dirs.clone())
                .unwrap_or_default(),
        };

        Ok(Self {
            package_manager,
            scan_options,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "auto-discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref name) = config.package_manager {
        name.parse::<PackageManagerKind>()
            .map_err(|message| PatrolError::Config { message })?;
    }

    let lists = [
        ("ignore_unused", &config.ignore_unused),
        ("ignore_dirs", &config.ignore_dirs),
    ];
    for (field, entries) in lists {
        if let Some(entries) = entries {
            if let Some(i) = entries.iter().position(|entry| entry.trim().is_empty()) {
                return Err(PatrolError::Config {
                    message: format!("{}[{}] must not be empty", field, i),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}
