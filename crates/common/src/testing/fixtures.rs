use crate::{BlockHeight, CertificationRegistry, Identity, ManufacturerRegistry, config::RegistryConfig};

pub const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const OTHER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
pub const BLOCK_HEIGHT: u64 = 123456;
pub const EQUIPMENT: &str = "EQUIP123";
pub const STANDARD: &str = "ISO9001";

pub fn admin() -> Identity {
    Identity::new(ADMIN)
}

pub fn other() -> Identity {
    Identity::new(OTHER)
}

pub fn block_height() -> BlockHeight {
    BlockHeight::new(BLOCK_HEIGHT)
}

/// Config where [`ADMIN`] administers both registries and no certifiers exist yet.
pub fn registry_config() -> RegistryConfig {
    RegistryConfig {
        manufacturer_admin: admin(),
        certification_admin: admin(),
        certifiers: Vec::new(),
    }
}

/// Builder for registries in a known state
#[derive(Debug, Default)]
pub struct RegistryFixture {
    manufacturers: Vec<Identity>,
    certifiers: Vec<Identity>,
    certifications: Vec<(String, String)>,
}

impl RegistryFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, manufacturer: Identity) -> Self {
        self.manufacturers.push(manufacturer);
        self
    }

    pub fn with_certifier(mut self, certifier: Identity) -> Self {
        self.certifiers.push(certifier);
        self
    }

    /// Certified by [`ADMIN`] at [`BLOCK_HEIGHT`]
    pub fn with_certification(mut self, equipment_id: &str, standard_id: &str) -> Self {
        self.certifications
            .push((equipment_id.to_string(), standard_id.to_string()));
        self
    }

    /// Panics if the requested state contradicts itself, e.g. duplicate manufacturers.
    pub fn build(self) -> (ManufacturerRegistry, CertificationRegistry) {
        let mut manufacturers = ManufacturerRegistry::new(admin());
        for manufacturer in self.manufacturers {
            manufacturers
                .add_manufacturer(&admin(), manufacturer)
                .expect("fixture manufacturer");
        }

        let mut certifications = CertificationRegistry::new(admin());
        for certifier in self.certifiers {
            certifications
                .add_certifier(&admin(), certifier)
                .expect("fixture certifier");
        }
        for (equipment_id, standard_id) in self.certifications {
            certifications
                .certify_equipment(&admin(), &equipment_id, &standard_id, block_height())
                .expect("fixture certification");
        }

        (manufacturers, certifications)
    }
}
