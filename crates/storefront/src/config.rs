//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KIOSK_API_BASE` - Base URL of the catalog service (default: `https://fakestoreapi.com`)
//! - `KIOSK_CHECKOUT_USER` - User id attached to checkout orders (default: 1)
//! - `RUST_LOG` - Tracing filter (default: info for the kiosk crates)

use thiserror::Error;
use url::Url;

use kiosk_catalog::DEFAULT_API_BASE;
use kiosk_core::UserId;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but its value does not parse.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the catalog service, without a trailing slash.
    pub api_base: String,
    /// User id attached to checkout orders. The catalog service has no
    /// notion of a signed-in shopper, so orders are placed under a
    /// configured placeholder account.
    pub checkout_user: UserId,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid. Every
    /// variable has a default, so an empty environment is fine.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = parse_api_base(&get_env_or_default("KIOSK_API_BASE", DEFAULT_API_BASE))?;

        let checkout_user = get_env_or_default("KIOSK_CHECKOUT_USER", "1")
            .parse::<i64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("KIOSK_CHECKOUT_USER".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_base,
            checkout_user: UserId::new(checkout_user),
        })
    }
}

/// Validate a catalog base URL and trim any trailing slash.
fn parse_api_base(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_API_BASE".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "KIOSK_API_BASE".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
