//! Load config from an optional JSON file, then apply environment overrides.

use crate::config::{validate, AppConfig};
use crate::error::ConfigError;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.json";

/// Full startup load: `.env`, JSON file (if present), process env, then validation.
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut config = load_from_file(Path::new(&path))?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

/// Parse the JSON file at `path`. A missing file yields defaults.
pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(ConfigError::Load(format!("{}: {}", path.display(), e))),
    };
    serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
}

/// Apply overrides from `lookup` (normally the process environment).
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("DB_HOST") {
        config.db.host = v;
    }
    if let Some(v) = lookup("DB_PORT") {
        config.db.port = parse_var("DB_PORT", &v)?;
    }
    if let Some(v) = lookup("DB_USER") {
        config.db.user = v;
    }
    if let Some(v) = lookup("DB_PASSWORD") {
        config.db.password = v;
    }
    if let Some(v) = lookup("DB_NAME") {
        config.db.database = v;
    }
    if let Some(v) = lookup("DB_VERSION") {
        config.db.version = non_empty(v);
    }
    if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
        config.db.max_connections = parse_var("DB_MAX_CONNECTIONS", &v)?;
    }
    if let Some(v) = lookup("DB_ACQUIRE_TIMEOUT_SECS") {
        config.db.acquire_timeout_secs = parse_var("DB_ACQUIRE_TIMEOUT_SECS", &v)?;
    }
    if let Some(v) = lookup("DB_CREATE_DATABASE") {
        config.db.create_database = parse_var("DB_CREATE_DATABASE", &v)?;
    }
    if let Some(v) = lookup("HOST") {
        config.server.host = v;
    }
    if let Some(v) = lookup("PORT") {
        config.server.port = parse_var("PORT", &v)?;
    }
    if let Some(v) = lookup("STATIC_DIR") {
        config.server.static_dir = v;
    }
    if let Some(v) = lookup("BODY_LIMIT_BYTES") {
        config.server.body_limit_bytes = parse_var("BODY_LIMIT_BYTES", &v)?;
    }
    if let Some(v) = lookup("LOG_LEVEL") {
        config.logging.level = v;
    }
    if let Some(v) = lookup("LOG_FILE") {
        config.logging.file = non_empty(v);
    }
    Ok(())
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::Parse(format!("{}={:?}: {}", key, value, e)))
}

fn non_empty(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}
