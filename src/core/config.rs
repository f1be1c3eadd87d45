//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sentiview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, log};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SentiviewConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FeedConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/reddit-sentiment";
pub const DEFAULT_LOG_FILE: &str = "sentiview.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const ENDPOINT_ENV: &str = "SENTIVIEW_ENDPOINT";
pub const LOG_LEVEL_ENV: &str = "SENTIVIEW_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Report
// ============================================================================

/// Diagnostics gathered while loading and resolving config.
///
/// Config is read before the file logger exists (the log path is itself a
/// setting), so messages are collected here and replayed once it is up.
#[derive(Debug, Default)]
pub struct ConfigReport {
    pub entries: Vec<(Level, String)>,
}

impl ConfigReport {
    fn info(&mut self, message: String) {
        self.entries.push((Level::Info, message));
    }

    fn warn(&mut self, message: String) {
        self.entries.push((Level::Warn, message));
    }

    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|(level, _)| *level <= Level::Warn)
    }

    /// Emit every collected message through the installed logger.
    pub fn replay(&self) {
        for (level, message) in &self.entries {
            log!(*level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sentiview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sentiview").join("config.toml"))
}

/// Load the config file at `path`, falling back to defaults on any failure.
///
/// A missing file gets a commented-out default written in its place. A file
/// that cannot be read or parsed is reported and ignored.
pub fn load_or_default(path: Option<&Path>, report: &mut ConfigReport) -> SentiviewConfig {
    let Some(path) = path else {
        report.warn("Could not determine home directory, using default config".to_string());
        return SentiviewConfig::default();
    };

    if !path.exists() {
        report.info(format!("No config file found, generating default at {}", path.display()));
        generate_default_config(path, report);
        return SentiviewConfig::default();
    }

    match load_config_from(path) {
        Ok(config) => {
            report.info(format!("Loaded config from {}", path.display()));
            config
        }
        Err(e) => {
            report.warn(format!("{} ({}), using defaults", e, path.display()));
            SentiviewConfig::default()
        }
    }
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<SentiviewConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# sentiview configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [feed]
# endpoint = "http://localhost:8000/reddit-sentiment"   # Or SENTIVIEW_ENDPOINT

# [logging]
# level = "debug"                   # "off", "error", "warn", "info", "debug", "trace"
# file = "sentiview.log"
"#;

fn generate_default_config(path: &Path, report: &mut ConfigReport) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            report.warn(format!("Failed to create config directory: {}", e));
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        report.warn(format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &SentiviewConfig,
    cli: &CliOverrides,
    report: &mut ConfigReport,
) -> ResolvedConfig {
    resolve_from(config, cli, |key| std::env::var(key).ok(), report)
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_from<F>(
    config: &SentiviewConfig,
    cli: &CliOverrides,
    env: F,
    report: &mut ConfigReport,
) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env(ENDPOINT_ENV))
        .or_else(|| config.feed.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Log level: env → config → default
    let log_level = env(LOG_LEVEL_ENV)
        .or_else(|| config.logging.level.clone())
        .map(|level| parse_level(&level, report))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        endpoint,
        log_level,
        log_file,
    }
}

fn parse_level(level: &str, report: &mut ConfigReport) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        report.warn(format!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL));
        DEFAULT_LOG_LEVEL
    })
}
