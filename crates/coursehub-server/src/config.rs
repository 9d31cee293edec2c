// ABOUTME: Configuration loading and validation for the coursehub server.
// ABOUTME: Reads PORT, NODE_ENV, CLERK_SECRET_KEY, and related environment variables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("NODE_ENV is production but CLERK_SECRET_KEY is not set; refusing to start without identity provider credentials")]
    ProductionWithoutSecret,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub production: bool,
    pub clerk_secret_key: Option<String>,
    pub clerk_api_base_url: Option<String>,
    pub data_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - PORT: HTTP listen port (default: 8001)
    /// - NODE_ENV: "production" enables production-mode validation
    /// - CLERK_SECRET_KEY: identity provider backend API key (required in production)
    /// - CLERK_API_BASE_URL: identity provider base URL override (optional)
    /// - COURSEHUB_DATA_DIR: directory for the course database (default: ./data)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse::<u16>().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => 8001,
        };

        let production = std::env::var("NODE_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let clerk_secret_key = std::env::var("CLERK_SECRET_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let clerk_api_base_url = std::env::var("CLERK_API_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty());

        let data_dir = std::env::var("COURSEHUB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        // Without the provider key the user routes cannot be authenticated
        if production && clerk_secret_key.is_none() {
            return Err(ConfigError::ProductionWithoutSecret);
        }

        Ok(Self {
            port,
            production,
            clerk_secret_key,
            clerk_api_base_url,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serialize all tests that read/write env vars to prevent race conditions.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("CLERK_SECRET_KEY");
            std::env::remove_var("CLERK_API_BASE_URL");
            std::env::remove_var("COURSEHUB_DATA_DIR");
        }
    }

    #[test]
    fn config_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 8001);
        assert!(!config.production);
        assert!(config.clerk_secret_key.is_none());
        assert!(config.clerk_api_base_url.is_none());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn config_rejects_invalid_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe { std::env::set_var("PORT", "not-a-port") };

        let result = ServerConfig::from_env();

        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe { std::env::remove_var("PORT") };

        assert!(result.is_err(), "should reject non-numeric PORT");
        assert!(
            result.unwrap_err().to_string().contains("not-a-port"),
            "error should echo the bad value"
        );
    }

    #[test]
    fn config_rejects_production_without_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe { std::env::set_var("NODE_ENV", "production") };

        let result = ServerConfig::from_env();

        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe { std::env::remove_var("NODE_ENV") };

        assert!(result.is_err(), "should reject production without secret");
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("CLERK_SECRET_KEY"),
            "error should mention the secret key: {}",
            err
        );
    }

    #[test]
    fn config_accepts_production_with_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe {
            std::env::set_var("NODE_ENV", "production");
            std::env::set_var("CLERK_SECRET_KEY", "sk_test_abc123");
            std::env::set_var("PORT", "9000");
        }

        let result = ServerConfig::from_env();

        // SAFETY: test-only code, guarded by ENV_MUTEX
        unsafe {
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("CLERK_SECRET_KEY");
            std::env::remove_var("PORT");
        }

        let config = result.unwrap();
        assert!(config.production);
        assert_eq!(config.port, 9000);
        assert_eq!(config.clerk_secret_key.as_deref(), Some("sk_test_abc123"));
    }
}
