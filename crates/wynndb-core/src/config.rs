use crate::app_config::{AppConfig, DEFAULT_ITEMS_URL, DEFAULT_OUTPUT_PATH, DEFAULT_PLACES_URL};
use crate::ConfigError;

/// Load application configuration from environment variables already in the process.
///
/// Does not read `.env` files; the binary loads those before calling this.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent variables take their documented default.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
            Err(e @ std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default)?;
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let items_url = non_empty("WYNNDB_ITEMS_URL", DEFAULT_ITEMS_URL)?;
    let places_url = non_empty("WYNNDB_PLACES_URL", DEFAULT_PLACES_URL)?;
    let output_path = PathBuf::from(non_empty("WYNNDB_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?);
    let log_level = or_default("WYNNDB_LOG_LEVEL", "info")?;
    let request_timeout_secs = parse_u64("WYNNDB_REQUEST_TIMEOUT_SECS", "60")?;
    let user_agent = or_default("WYNNDB_USER_AGENT", "wynndb/0.1 (ingredient-catalog)")?;

    Ok(AppConfig {
        items_url,
        places_url,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
