use crate::ConfigError;

/// Delay before the injected snippet searches for the coupon input,
/// matching the render time observed on the live Mariano's page.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Milliseconds the injected snippet waits before locating the search
    /// input. The wait is fixed, not a poll; if the page has not rendered
    /// by then the search silently does not happen.
    pub search_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
        }
    }
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_config`], this does NOT load `.env` files — useful when the
/// caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure lookup — no `set_var`/`remove_var` needed.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let search_delay_ms = parse_u64("CLIPCART_SEARCH_DELAY_MS", DEFAULT_SEARCH_DELAY_MS)?;

    Ok(AppConfig { search_delay_ms })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
