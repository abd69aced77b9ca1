//! # TArchiver Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional TArchiver
//! configuration. Nothing is required: with no files present every setting
//! falls back to the defaults below, which reproduce the plain behaviour of
//! running the external tools directly.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.tarchiver.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/tarchiver/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Command-line flags (`--timeout`) are applied on top by `main.rs`.
//!
//! ## Example file
//!
//! ```toml
//! [execution]
//! timeout_secs = 600
//! working_dir = "~/archives"
//!
//! [reporting]
//! exit_zero_on_failure = false
//! color = "auto"
//! ```
//!
use crate::core::error::{Result, TarchiverError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// How the external tool is launched.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Kill the external tool after this many seconds. `None` waits forever.
    pub timeout_secs: Option<u64>,
    /// Directory the external tool runs in (can use ~). Relative archive and
    /// destination paths are resolved against it.
    pub working_dir: Option<String>,
}

/// How outcomes are presented and turned into exit codes.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportingConfig {
    /// Exit with status 0 even when the operation failed. Unset means `false`.
    pub exit_zero_on_failure: Option<bool>,
    /// Whether the status panels are coloured. Unset means `auto`.
    pub color: Option<ColorMode>,
}

impl ReportingConfig {
    pub fn exit_zero_on_failure(&self) -> bool {
        self.exit_zero_on_failure.unwrap_or(false)
    }

    pub fn color(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

const PROJECT_CONFIG_FILENAME: &str = ".tarchiver.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "TArchiver", "tarchiver") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.tarchiver.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever the project file sets them.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        execution: ExecutionConfig {
            timeout_secs: project.execution.timeout_secs.or(user.execution.timeout_secs),
            working_dir: project.execution.working_dir.or(user.execution.working_dir),
        },
        reporting: ReportingConfig {
            exit_zero_on_failure: project
                .reporting
                .exit_zero_on_failure
                .or(user.reporting.exit_zero_on_failure),
            color: project.reporting.color.or(user.reporting.color),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.execution.working_dir.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded working directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.execution.timeout_secs == Some(0) {
        return Err(anyhow!(TarchiverError::Config(
            "execution.timeout_secs must be greater than zero.".to_string()
        )));
    }
    if let Some(dir) = &config.execution.working_dir {
        let dir = Path::new(dir);
        if !dir.is_dir() {
            return Err(anyhow!(TarchiverError::Config(format!(
                "Configured working directory '{}' does not exist or is not a directory.",
                dir.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
