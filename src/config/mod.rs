//! Configuration for NoteCraft

mod http;
mod logging;
mod model;
mod transform;

pub use http::HttpConfig;
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use model::{ModelConfig, API_KEY_ENV};
pub use transform::TransformConfig;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable that overrides the listen port
pub const PORT_ENV: &str = "PORT";

/// Main configuration for the NoteCraft service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP API server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// External language model configuration
    #[serde(default)]
    pub model: ModelConfig,
    /// Transform defaults and limits
    #[serde(default)]
    pub transform: TransformConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    /// Environment overrides are applied either way.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Config::default()
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PORT` to the listen address. The model key is read lazily
    /// from the environment by [`ModelConfig::resolve_api_key`].
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{} must be a port number, got '{}'", PORT_ENV, port))?;
            self.http.set_port(port);
        }
        Ok(())
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // HTTP
        if self.http.listen_addr.is_empty() {
            errors.push("http listen_addr must not be empty".to_string());
        } else if self.http.listen_addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "http listen_addr '{}' is not a valid socket address",
                self.http.listen_addr
            ));
        }
        if let Some(public_url) = &self.http.public_url {
            match url::Url::parse(public_url) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
                _ => errors.push(format!(
                    "http public_url '{}' must be an http or https URL",
                    public_url
                )),
            }
        }

        // Model
        if self.model.model.trim().is_empty() {
            errors.push("model name must not be empty".to_string());
        }
        if self.model.timeout_secs == 0 {
            errors.push("model timeout_secs must be positive".to_string());
        }
        if url::Url::parse(&self.model.endpoint).is_err() {
            errors.push(format!("model endpoint '{}' is not a valid URL", self.model.endpoint));
        }

        // Transform
        let limit = self.transform.max_items_limit;
        if limit == 0 {
            errors.push("max_items_limit must be positive".to_string());
        }
        if self.transform.default_max_tags == 0 || self.transform.default_max_tags > limit {
            errors.push(format!("default_max_tags must be between 1 and {}", limit));
        }
        if self.transform.default_max_terms == 0 || self.transform.default_max_terms > limit {
            errors.push(format!("default_max_terms must be between 1 and {}", limit));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> Config {
        Config::default()
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(valid_config().validate().is_ok(), "default config should be valid");
    }

    #[test]
    fn validate_rejects_bad_listen_addr() {
        let mut cfg = valid_config();
        cfg.http.listen_addr = "not-an-addr".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("not a valid socket address"));
    }

    #[test]
    fn validate_rejects_non_http_public_url() {
        let mut cfg = valid_config();
        cfg.http.public_url = Some("ftp://example.com".to_string());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must be an http or https URL"));

        cfg.http.public_url = Some("https://notes.example.com".to_string());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut cfg = valid_config();
        cfg.model.timeout_secs = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs must be positive"));
    }

    #[test]
    fn validate_rejects_defaults_above_limit() {
        let mut cfg = valid_config();
        cfg.transform.max_items_limit = 5;
        let err = cfg.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("default_max_tags must be between 1 and 5"));
        assert!(msg.contains("default_max_terms must be between 1 and 5"));
    }

    #[test]
    fn validate_collects_multiple_errors() {
        let mut cfg = valid_config();
        cfg.model.model = String::new();
        cfg.model.timeout_secs = 0;
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("model name must not be empty"));
        assert!(msg.contains("timeout_secs must be positive"));
    }

    #[test]
    fn load_reads_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[http]
listen_addr = "0.0.0.0:9090"
public_url = "https://notes.example.com"

[model]
model = "gemini-1.5-flash"
timeout_secs = 10

[logging]
format = "json"
level = "debug"
"#
        )
        .unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.http.listen_addr, "0.0.0.0:9090");
        assert_eq!(cfg.model.model, "gemini-1.5-flash");
        assert_eq!(cfg.model.timeout_secs, 10);
        assert_eq!(cfg.model.max_retries, 1);
        assert_eq!(cfg.transform.default_max_tags, 10);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, LogLevel::Debug);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model]\ntimeout_secs = 0").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs must be positive"));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nbroken").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.http.listen_addr, Config::default().http.listen_addr);
        assert_eq!(parsed.model.endpoint, Config::default().model.endpoint);
    }
}
