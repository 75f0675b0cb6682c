//! Configuration loader
//!
//! Loads application configuration from a JSON or TOML file.
//!
//! ## Loading Strategy
//! 1. `GUILDMEET_CONFIG` names the file explicitly, if set
//! 2. Otherwise multiple paths are probed for a config file
//! 3. The format is detected from the file extension
//! 4. The parsed configuration is validated before it is returned
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./guildmeet.json` or `./guildmeet.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use guildmeet_domain::{Config, GuildMeetError, Result};
use url::Url;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GUILDMEET_CONFIG";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "guildmeet.json", "guildmeet.toml"];

/// Load configuration from `GUILDMEET_CONFIG` or the first probed file.
///
/// # Errors
/// Returns `GuildMeetError::Config` if:
/// - No configuration file can be found
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load() -> Result<Config> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => {
            tracing::debug!(env = CONFIG_PATH_ENV, "Using explicit configuration path");
            load_from_file(Some(PathBuf::from(path)))
        }
        None => load_from_file(None),
    }
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GuildMeetError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GuildMeetError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GuildMeetError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GuildMeetError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse and validate configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `GuildMeetError::Config` if format is invalid, parsing fails or
/// a value is out of range.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GuildMeetError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| GuildMeetError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(GuildMeetError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn validate(config: &Config) -> Result<()> {
    let meetup = &config.meetup;

    require_non_empty("meetup.client_id", &meetup.client_id)?;
    require_non_empty("meetup.client_secret", &meetup.client_secret)?;
    require_non_empty("meetup.redirect_uri", &meetup.redirect_uri)?;

    Url::parse(&meetup.redirect_uri).map_err(|e| {
        GuildMeetError::Config(format!("meetup.redirect_uri is not a valid URL: {e}"))
    })?;

    if meetup.request_timeout_secs == 0 {
        return Err(GuildMeetError::Config(
            "meetup.request_timeout_secs must be greater than zero".into(),
        ));
    }

    require_non_empty("database.path", &config.database.path)?;

    if config.database.pool_size == 0 {
        return Err(GuildMeetError::Config("database.pool_size must be at least 1".into()));
    }

    Ok(())
}

fn require_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GuildMeetError::Config(format!("Missing required value: {key}")));
    }
    Ok(())
}
