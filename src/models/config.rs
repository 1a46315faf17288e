//! Configuration model loaded from external sources.

use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Identity provider settings, read once at startup.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IdentityConfig {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings shared by the API client and the CLI.
pub struct AppConfig {
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Token attached to requests unless overridden on the command line.
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Layers `config/default`, `config/{APP_ENV}` and `APP_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn missing_optional_settings_use_defaults() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_base_url: https://api.example.com/\n",
                FileFormat::Yaml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session_token, None);
        assert_eq!(config.identity, IdentityConfig::default());
    }

    #[test]
    fn nested_identity_section_is_read() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_base_url: http://localhost:8080/\n\
                 request_timeout_secs: 5\n\
                 identity:\n  region: us-east-1\n  user_pool_id: pool\n  client_id: client\n",
                FileFormat::Yaml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.identity.region, "us-east-1");
    }
}
