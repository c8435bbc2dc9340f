use config::ConfigError;
use serde::{Deserialize, Serialize};

use crate::{CertificationRegistry, Identity, ManufacturerRegistry, RegistryError};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Initial admin of the manufacturer allow-list
    pub manufacturer_admin: Identity,

    /// Initial admin of the certification registry and its certifier list
    pub certification_admin: Identity,

    /// Certifiers authorized at startup, added on behalf of `certification_admin`
    #[serde(default)]
    pub certifiers: Vec<Identity>,
}

impl RegistryConfig {
    /// Validate that the registry configuration is complete and usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manufacturer_admin.is_empty() {
            return Err(ConfigError::Message(
                "Registry manufacturer_admin cannot be empty".to_string(),
            ));
        }
        if self.certification_admin.is_empty() {
            return Err(ConfigError::Message(
                "Registry certification_admin cannot be empty".to_string(),
            ));
        }
        if let Some(position) = self.certifiers.iter().position(Identity::is_empty) {
            return Err(ConfigError::Message(format!(
                "Registry certifiers[{position}] cannot be empty"
            )));
        }

        Ok(())
    }

    pub fn build_manufacturer_registry(&self) -> ManufacturerRegistry {
        ManufacturerRegistry::new(self.manufacturer_admin.clone())
    }

    /// Creates the certification registry and seeds the configured certifiers.
    pub fn build_certification_registry(&self) -> Result<CertificationRegistry, RegistryError> {
        let mut registry = CertificationRegistry::new(self.certification_admin.clone());
        for certifier in &self.certifiers {
            registry.add_certifier(&self.certification_admin, certifier.clone())?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RegistryConfig {
        RegistryConfig {
            manufacturer_admin: Identity::new("ST1ADMIN"),
            certification_admin: Identity::new("ST2ADMIN"),
            certifiers: vec![Identity::new("ST3CERT")],
        }
    }

    #[test]
    fn test_registry_config_validation() {
        assert!(valid_config().validate().is_ok());

        let empty_manufacturer_admin = RegistryConfig {
            manufacturer_admin: Identity::new(""),
            ..valid_config()
        };
        let result = empty_manufacturer_admin.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("manufacturer_admin"));

        let empty_certification_admin = RegistryConfig {
            certification_admin: Identity::new("  "),
            ..valid_config()
        };
        let result = empty_certification_admin.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("certification_admin"));

        let empty_certifier = RegistryConfig {
            certifiers: vec![Identity::new("ST3CERT"), Identity::new("")],
            ..valid_config()
        };
        let result = empty_certifier.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("certifiers[1]"));
    }

    #[test]
    fn test_registries_are_built_with_independent_admins() {
        let config = valid_config();

        let manufacturers = config.build_manufacturer_registry();
        let certifications = config.build_certification_registry().unwrap();

        assert_eq!(manufacturers.admin(), &Identity::new("ST1ADMIN"));
        assert_eq!(certifications.admin(), &Identity::new("ST2ADMIN"));
        assert!(certifications.is_authorized_certifier(&Identity::new("ST3CERT")));
    }

    #[test]
    fn test_certifiers_default_to_empty() {
        let config: RegistryConfig = serde_json::from_str(
            r#"{ "manufacturer_admin": "ST1ADMIN", "certification_admin": "ST2ADMIN" }"#,
        )
        .unwrap();

        assert!(config.certifiers.is_empty());
        assert!(config.validate().is_ok());
    }
}
