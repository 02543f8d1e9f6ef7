use super::{AppConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vendor-portal-bff")]
#[command(about = "REST adapter between the vendor portal and the ERP OData service")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; falls back to environment variables when omitted")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Dotenv file loaded before reading the environment", default_value = ".env")]
    pub env_file: PathBuf,

    #[arg(long, help = "Override the listen port")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves the effective configuration. CLI overrides win over file and environment.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_app_config(),
            None => AppConfig::from_env()?,
        };

        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "vendor-portal-bff",
            "--config",
            "adapter.toml",
            "--port",
            "8081",
            "--verbose",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("adapter.toml")));
        assert_eq!(cli.port, Some(8081));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_port_override_applies_to_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adapter.toml");
        std::fs::write(
            &path,
            r#"
[upstream]
base_url = "https://erp.example.com/odata"
username = "portal"
password = "pw"

[server]
port = 3000
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "vendor-portal-bff",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9090",
        ]);
        let config = cli.load().unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.upstream.username, "portal");
    }
}
