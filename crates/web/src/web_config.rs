use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File};
use equipcert_common::config::RegistryConfig;
use serde::{Deserialize, Serialize};

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WebConfig {
    /// Address to bind the web server to
    /// Defaults to 127.0.0.1:3000
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Initial admins and certifiers of the hosted registries
    pub registries: RegistryConfig,
}

impl WebConfig {
    /// Load configuration from multiple sources in order of priority:
    /// 1. Configuration file (config.toml, config.yaml, config.json)
    /// 2. Environment variables (prefixed with EQUIPCERT__, nested keys separated by __)
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("EQUIPCERT").separator("__"))
            .build()?;
        let web_config = config.try_deserialize::<WebConfig>()?;

        web_config.validate()?;

        Ok(web_config)
    }

    /// Validate that the web configuration is complete and usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.registries.validate()?;

        Ok(())
    }

    /// Get the socket address to bind the web server to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address.parse().map_err(|e| {
            ConfigError::Message(format!(
                "Web bind_address is not a valid socket address: {e}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use equipcert_common::testing;

    use super::*;

    #[test]
    fn test_web_config_validation() {
        let valid = WebConfig {
            bind_address: default_bind_address(),
            registries: testing::registry_config(),
        };
        assert!(valid.validate().is_ok());
        assert_eq!(
            valid.socket_addr().unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );

        let bad_address = WebConfig {
            bind_address: "not-an-address".to_string(),
            ..valid.clone()
        };
        let result = bad_address.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not a valid socket address")
        );

        let mut bad_registries = valid.clone();
        bad_registries.registries.manufacturer_admin = "".into();
        assert!(bad_registries.validate().is_err());
    }

    #[test]
    fn test_bind_address_defaults() {
        let config: WebConfig = serde_json::from_str(
            r#"{ "registries": { "manufacturer_admin": "ST1", "certification_admin": "ST1" } }"#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }
}
