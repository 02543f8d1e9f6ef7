pub mod cli;
pub mod toml_config;

use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for the ERP OData service.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Skips certificate chain validation. Only for self-signed dev systems.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SAP_BASE_URL");
        let username = lookup("SAP_USERNAME");
        let password = lookup("SAP_PASSWORD");

        let upstream = UpstreamConfig {
            base_url: validate_required_field("SAP_BASE_URL", &base_url)?.clone(),
            username: validate_required_field("SAP_USERNAME", &username)?.clone(),
            password: validate_required_field("SAP_PASSWORD", &password)?.clone(),
            timeout_seconds: parse_or(
                "SAP_TIMEOUT_SECONDS",
                lookup("SAP_TIMEOUT_SECONDS"),
                DEFAULT_TIMEOUT_SECONDS,
            )?,
            accept_invalid_certs: parse_flag(
                "SAP_ACCEPT_INVALID_CERTS",
                lookup("SAP_ACCEPT_INVALID_CERTS"),
            )?,
        };

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
        };

        Ok(Self { upstream, server })
    }
}

fn parse_or<T>(field: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| AdapterError::InvalidConfigValueError {
                field: field.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_flag(field: &str, raw: Option<String>) -> Result<bool> {
    let Some(value) = raw else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AdapterError::InvalidConfigValueError {
            field: field.to_string(),
            value,
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.base_url", &self.upstream.base_url)?;
        validate_non_empty_string(
            "upstream.username",
            &self.upstream.username,
            &self.upstream.username,
        )?;
        validate_non_empty_string("upstream.password", &self.upstream.password, "***")?;
        validate_range("upstream.timeout_seconds", self.upstream.timeout_seconds, 1, 600)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        if self.upstream.accept_invalid_certs {
            tracing::warn!(
                "⚠️ TLS certificate validation is DISABLED for upstream {}",
                self.upstream.base_url
            );
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("SAP_BASE_URL", "https://erp.example.com/sap/opu/odata/sap/ZVENDOR_SRV"),
        ("SAP_USERNAME", "portal"),
        ("SAP_PASSWORD", "s3cret"),
    ];

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.upstream.username, "portal");
        assert_eq!(config.upstream.timeout_seconds, 30);
        assert!(!config.upstream.accept_invalid_certs);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("SAP_TIMEOUT_SECONDS", "5"),
            ("SAP_ACCEPT_INVALID_CERTS", "true"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]);
        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.upstream.timeout(), Duration::from_secs(5));
        assert!(config.upstream.accept_invalid_certs);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_from_lookup_requires_credentials() {
        let err = AppConfig::from_lookup(lookup_from(&REQUIRED[..2])).unwrap_err();
        match err {
            AdapterError::MissingConfigError { field } => assert_eq!(field, "SAP_PASSWORD"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "not-a-port"));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&pairs)),
            Err(AdapterError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let mut config = AppConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        config.upstream.base_url = "ftp://erp.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AppConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("***"));
    }
}
