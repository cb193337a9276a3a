//! Config validation: reject values the service cannot start with.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Validation("server.port must be non-zero".into()));
    }
    if config.server.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("server.body_limit_bytes must be non-zero".into()));
    }
    if config.db.host.trim().is_empty() {
        return Err(ConfigError::Validation("db.host is required".into()));
    }
    if config.db.user.trim().is_empty() {
        return Err(ConfigError::Validation("db.user is required".into()));
    }
    if config.db.database.trim().is_empty() {
        return Err(ConfigError::Validation("db.database is required".into()));
    }
    if config.db.max_connections == 0 {
        return Err(ConfigError::Validation("db.max_connections must be at least 1".into()));
    }
    Ok(())
}
