use tracing::{info, warn};

use crate::{Identity, RegistryError};

/// Holds the single identity allowed to perform privileged mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminGate {
    admin: Identity,
}

impl AdminGate {
    pub fn new(admin: Identity) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> &Identity {
        &self.admin
    }

    pub fn is_admin(&self, caller: &Identity) -> bool {
        self.admin == *caller
    }

    /// Fails with [`RegistryError::Unauthorized`] unless `caller` is the current admin.
    pub fn authorize(&self, caller: &Identity) -> Result<(), RegistryError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    /// Hands admin rights to `new_admin`. Transferring to oneself is accepted and changes nothing.
    pub fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        if let Err(e) = self.authorize(caller) {
            warn!(caller = %caller, code = e.code(), "Rejected admin transfer");
            return Err(e);
        }
        info!(from = %self.admin, to = %new_admin, "Transferring admin rights");
        self.admin = new_admin;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    fn other() -> Identity {
        Identity::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG")
    }

    #[test]
    fn test_is_admin() {
        let gate = AdminGate::new(admin());
        assert!(gate.is_admin(&admin()));
        assert!(!gate.is_admin(&other()));
    }

    #[test]
    fn test_transfer_admin_moves_rights() {
        let mut gate = AdminGate::new(admin());

        gate.transfer_admin(&admin(), other()).unwrap();

        assert_eq!(gate.admin(), &other());
        assert_eq!(gate.authorize(&admin()), Err(RegistryError::Unauthorized));
        assert!(gate.authorize(&other()).is_ok());
    }

    #[test]
    fn test_transfer_admin_rejects_non_admin() {
        let mut gate = AdminGate::new(admin());

        let result = gate.transfer_admin(&other(), other());

        assert_eq!(result, Err(RegistryError::Unauthorized));
        assert_eq!(gate.admin(), &admin());
    }

    #[test]
    fn test_transfer_admin_to_self_is_noop() {
        let mut gate = AdminGate::new(admin());
        gate.transfer_admin(&admin(), admin()).unwrap();
        assert_eq!(gate, AdminGate::new(admin()));
    }
}
