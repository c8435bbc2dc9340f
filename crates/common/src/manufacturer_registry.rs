use tracing::{info, instrument, warn};

use crate::{
    AccessControlledRegistry, Identity, InsertPolicy, RegistryError, RemovePolicy,
};

/// Allow-list of verified manufacturers.
///
/// Both transitions are strict: adding a verified manufacturer fails with
/// [`RegistryError::AlreadyVerified`] and removing an unknown one fails with
/// [`RegistryError::NotFound`].
#[derive(Clone, Debug)]
pub struct ManufacturerRegistry {
    manufacturers: AccessControlledRegistry<Identity, ()>,
}

impl ManufacturerRegistry {
    pub fn new(admin: Identity) -> Self {
        Self {
            manufacturers: AccessControlledRegistry::new(
                admin,
                InsertPolicy::Reject(RegistryError::AlreadyVerified),
                RemovePolicy::Reject,
            ),
        }
    }

    pub fn admin(&self) -> &Identity {
        self.manufacturers.gate().admin()
    }

    pub fn is_admin(&self, caller: &Identity) -> bool {
        self.manufacturers.is_admin(caller)
    }

    #[instrument(skip_all, fields(caller = %caller, new_admin = %new_admin))]
    pub fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.manufacturers.transfer_admin(caller, new_admin)
    }

    #[instrument(skip_all, fields(caller = %caller, manufacturer = %manufacturer))]
    pub fn add_manufacturer(
        &mut self,
        caller: &Identity,
        manufacturer: Identity,
    ) -> Result<(), RegistryError> {
        match self.manufacturers.insert(caller, manufacturer, ()) {
            Ok(()) => {
                info!("Manufacturer verified");
                Ok(())
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Failed to add manufacturer");
                Err(e)
            }
        }
    }

    #[instrument(skip_all, fields(caller = %caller, manufacturer = %manufacturer))]
    pub fn remove_manufacturer(
        &mut self,
        caller: &Identity,
        manufacturer: &Identity,
    ) -> Result<(), RegistryError> {
        match self.manufacturers.remove(caller, manufacturer) {
            Ok(()) => {
                info!("Manufacturer removed");
                Ok(())
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Failed to remove manufacturer");
                Err(e)
            }
        }
    }

    pub fn is_verified_manufacturer(&self, manufacturer: &Identity) -> bool {
        self.manufacturers.contains(manufacturer)
    }

    pub fn list_manufacturers(&self) -> Vec<Identity> {
        self.manufacturers.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::log_capture::count_warnings;

    const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    const OTHER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    fn admin() -> Identity {
        Identity::new(ADMIN)
    }

    fn other() -> Identity {
        Identity::new(OTHER)
    }

    #[test]
    fn test_admin_can_add_manufacturer() {
        let mut registry = ManufacturerRegistry::new(admin());

        assert!(registry.add_manufacturer(&admin(), other()).is_ok());
        assert!(registry.is_verified_manufacturer(&other()));
    }

    #[test]
    fn test_cannot_add_manufacturer_twice() {
        let mut registry = ManufacturerRegistry::new(admin());
        registry.add_manufacturer(&admin(), other()).unwrap();

        let result = registry.add_manufacturer(&admin(), other());

        assert_eq!(result, Err(RegistryError::AlreadyVerified));
        assert_eq!(result.unwrap_err().code(), 101);
        assert!(registry.is_verified_manufacturer(&other()));
    }

    #[test]
    fn test_admin_can_remove_manufacturer() {
        let mut registry = ManufacturerRegistry::new(admin());
        registry.add_manufacturer(&admin(), other()).unwrap();

        assert!(registry.remove_manufacturer(&admin(), &other()).is_ok());
        assert!(!registry.is_verified_manufacturer(&other()));
        assert!(registry.list_manufacturers().is_empty());
    }

    #[test]
    fn test_cannot_remove_unknown_manufacturer() {
        let mut registry = ManufacturerRegistry::new(admin());

        let result = registry.remove_manufacturer(&admin(), &other());

        assert_eq!(result, Err(RegistryError::NotFound));
        assert_eq!(result.unwrap_err().code(), 102);
    }

    #[test]
    fn test_unknown_manufacturer_is_not_verified() {
        let mut registry = ManufacturerRegistry::new(admin());
        assert!(!registry.is_verified_manufacturer(&other()));

        registry.add_manufacturer(&admin(), other()).unwrap();
        assert!(registry.is_verified_manufacturer(&other()));
    }

    #[test]
    fn test_non_admin_cannot_mutate() {
        let mut registry = ManufacturerRegistry::new(admin());
        registry.add_manufacturer(&admin(), admin()).unwrap();

        assert_eq!(
            registry.add_manufacturer(&other(), other()),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(
            registry.remove_manufacturer(&other(), &admin()),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(
            registry.transfer_admin(&other(), other()),
            Err(RegistryError::Unauthorized)
        );

        assert_eq!(registry.list_manufacturers(), vec![admin()]);
        assert_eq!(registry.admin(), &admin());
    }

    #[test]
    fn test_transfer_admin_rights() {
        let mut registry = ManufacturerRegistry::new(admin());

        assert!(registry.transfer_admin(&admin(), other()).is_ok());
        assert_eq!(registry.admin(), &other());
        assert!(!registry.is_admin(&admin()));

        // Old admin is locked out, new admin takes over
        assert_eq!(
            registry.add_manufacturer(&admin(), Identity::new("M1")),
            Err(RegistryError::Unauthorized)
        );
        assert!(registry.add_manufacturer(&other(), Identity::new("M1")).is_ok());
    }

    #[test]
    fn test_add_remove_lifecycle() {
        let mut registry = ManufacturerRegistry::new(admin());
        let manufacturer = Identity::new("M");

        assert!(registry.add_manufacturer(&admin(), manufacturer.clone()).is_ok());
        assert_eq!(
            registry.add_manufacturer(&admin(), manufacturer.clone()).map_err(|e| e.code()),
            Err(101)
        );
        assert!(registry.remove_manufacturer(&admin(), &manufacturer).is_ok());
        assert_eq!(
            registry.remove_manufacturer(&admin(), &manufacturer).map_err(|e| e.code()),
            Err(102)
        );
    }

    #[test]
    fn test_rejected_call_logs_one_warning() {
        let mut registry = ManufacturerRegistry::new(admin());
        registry.add_manufacturer(&admin(), other()).unwrap();

        let warnings = count_warnings(|| {
            let _ = registry.add_manufacturer(&other(), Identity::new("M1"));
        });
        assert_eq!(warnings, 1);

        let warnings = count_warnings(|| {
            let _ = registry.remove_manufacturer(&other(), &other());
        });
        assert_eq!(warnings, 1);

        let warnings = count_warnings(|| {
            let _ = registry.transfer_admin(&other(), other());
        });
        assert_eq!(warnings, 1);
    }
}
