//! Configuration management for the lead-capture flow.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional .env file loaded via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Mautic form id, matching the landing-page form.
const DEFAULT_FORM_ID: u32 = 1;

/// Default Mautic form name, matching the landing-page form.
const DEFAULT_FORM_NAME: &str = "formcapturasorteio";

/// Localized "please wait" message shown while a submission is in flight.
const DEFAULT_SUBMITTING_MESSAGE: &str = "Por favor, aguarde...";

/// Configuration for the lead-capture flow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mautic base URL (scheme + host, no trailing path)
    pub mautic_base_url: String,

    /// Numeric id of the Mautic form leads are posted to
    pub form_id: u32,

    /// Name of the Mautic form, sent alongside the field values
    pub form_name: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Localized message shown while a submission is in flight
    pub submitting_message: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MAUTIC_BASE_URL`: Base URL of the Mautic instance
    ///
    /// Optional environment variables:
    /// - `MAUTIC_FORM_ID`: Form id (default: 1)
    /// - `MAUTIC_FORM_NAME`: Form name (default: "formcapturasorteio")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SUBMITTING_MESSAGE`: In-flight message (default: "Por favor, aguarde...")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let mautic_base_url = env::var("MAUTIC_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("MAUTIC_BASE_URL".to_string()))?;

        // Validate base URL format
        if !mautic_base_url.starts_with("http://") && !mautic_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MAUTIC_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let form_id = Self::parse_env_u32("MAUTIC_FORM_ID", DEFAULT_FORM_ID)?;
        let form_name =
            env::var("MAUTIC_FORM_NAME").unwrap_or_else(|_| DEFAULT_FORM_NAME.to_string());

        if form_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "MAUTIC_FORM_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let submitting_message = env::var("SUBMITTING_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SUBMITTING_MESSAGE.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            mautic_base_url,
            form_id,
            form_name,
            request_timeout,
            submitting_message,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mautic_base_url: String::new(),
            form_id: DEFAULT_FORM_ID,
            form_name: DEFAULT_FORM_NAME.to_string(),
            request_timeout: 10,
            submitting_message: DEFAULT_SUBMITTING_MESSAGE.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.form_id, 1);
        assert_eq!(config.form_name, "formcapturasorteio");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.submitting_message, "Por favor, aguarde...");
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        let _guard = EnvGuard::new();
        let _ = dotenvy::dotenv();
        env::remove_var("MAUTIC_BASE_URL");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }

    #[test]
    #[serial]
    fn test_config_from_env_full() {
        let mut guard = EnvGuard::new();
        guard.set("MAUTIC_BASE_URL", "https://mkt.example.com");
        guard.set("MAUTIC_FORM_ID", "7");
        guard.set("MAUTIC_FORM_NAME", "formtest");
        guard.set("REQUEST_TIMEOUT", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.mautic_base_url, "https://mkt.example.com");
        assert_eq!(config.form_id, 7);
        assert_eq!(config.form_name, "formtest");
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_url_scheme() {
        let mut guard = EnvGuard::new();
        guard.set("MAUTIC_BASE_URL", "ftp://mkt.example.com");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_form_id() {
        let mut guard = EnvGuard::new();
        guard.set("MAUTIC_BASE_URL", "https://mkt.example.com");
        guard.set("MAUTIC_FORM_ID", "not-a-number");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
