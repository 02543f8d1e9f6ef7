use super::{AppConfig, ServerConfig, UpstreamConfig};
use crate::utils::error::{AdapterError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

/// On-disk form of [`AppConfig`]. `${VAR}` placeholders are filled from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Parses `content` after substituting placeholders through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, lookup);

        toml::from_str(&processed).map_err(|e| AdapterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_app_config(self) -> AppConfig {
        AppConfig {
            upstream: self.upstream,
            server: self.server,
        }
    }
}

/// Unknown variables are left in place so validation reports them verbatim.
fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_VAR
        .replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            lookup(name).unwrap_or_else(|| format!("${{{}}}", name))
        })
        .into_owned()
}
