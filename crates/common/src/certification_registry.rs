use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    AccessControlledRegistry, BlockHeight, Identity, InsertPolicy, PolicyMap, RegistryError,
    RemovePolicy,
};

/// Identifies a certification: one equipment item against one standard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CertificationKey {
    pub equipment_id: String,
    pub standard_id: String,
}

impl CertificationKey {
    pub fn new(equipment_id: impl Into<String>, standard_id: impl Into<String>) -> Self {
        Self {
            equipment_id: equipment_id.into(),
            standard_id: standard_id.into(),
        }
    }
}

/// Proof that a piece of equipment was certified. Never updated once stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificationRecord {
    pub certified: bool,
    /// Block height at which the certification was recorded
    pub timestamp: BlockHeight,
    pub certifier: Identity,
}

/// One-time certification events keyed by (equipment, standard).
///
/// The admin and any authorized certifier may certify. The certifier
/// allow-list carries the registry's only admin gate; unlike manufacturers,
/// adding an existing certifier or removing an unknown one is not an error.
/// The manufacturer registry has its own, unrelated admin.
#[derive(Clone, Debug)]
pub struct CertificationRegistry {
    certifiers: AccessControlledRegistry<Identity, ()>,
    certifications: PolicyMap<CertificationKey, CertificationRecord>,
}

impl CertificationRegistry {
    pub fn new(admin: Identity) -> Self {
        Self {
            certifiers: AccessControlledRegistry::new(
                admin,
                InsertPolicy::Idempotent,
                RemovePolicy::Idempotent,
            ),
            certifications: PolicyMap::new(InsertPolicy::Reject(RegistryError::AlreadyCertified)),
        }
    }

    pub fn admin(&self) -> &Identity {
        self.certifiers.gate().admin()
    }

    pub fn is_admin(&self, caller: &Identity) -> bool {
        self.certifiers.is_admin(caller)
    }

    #[instrument(skip_all, fields(caller = %caller, new_admin = %new_admin))]
    pub fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.certifiers.transfer_admin(caller, new_admin)
    }

    #[instrument(skip_all, fields(caller = %caller, certifier = %certifier))]
    pub fn add_certifier(
        &mut self,
        caller: &Identity,
        certifier: Identity,
    ) -> Result<(), RegistryError> {
        match self.certifiers.insert(caller, certifier, ()) {
            Ok(()) => {
                info!("Certifier authorized");
                Ok(())
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Failed to add certifier");
                Err(e)
            }
        }
    }

    #[instrument(skip_all, fields(caller = %caller, certifier = %certifier))]
    pub fn remove_certifier(
        &mut self,
        caller: &Identity,
        certifier: &Identity,
    ) -> Result<(), RegistryError> {
        match self.certifiers.remove(caller, certifier) {
            Ok(()) => {
                info!("Certifier revoked");
                Ok(())
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Failed to remove certifier");
                Err(e)
            }
        }
    }

    pub fn is_authorized_certifier(&self, identity: &Identity) -> bool {
        self.certifiers.contains(identity)
    }

    pub fn list_certifiers(&self) -> Vec<Identity> {
        self.certifiers.keys()
    }

    #[instrument(skip_all, fields(caller = %caller, equipment_id = %equipment_id, standard_id = %standard_id, block_height = %block_height))]
    pub fn certify_equipment(
        &mut self,
        caller: &Identity,
        equipment_id: &str,
        standard_id: &str,
        block_height: BlockHeight,
    ) -> Result<(), RegistryError> {
        if !self.is_admin(caller) && !self.is_authorized_certifier(caller) {
            warn!(code = RegistryError::Unauthorized.code(), "Caller may not certify equipment");
            return Err(RegistryError::Unauthorized);
        }

        let record = CertificationRecord {
            certified: true,
            timestamp: block_height,
            certifier: caller.clone(),
        };
        match self
            .certifications
            .insert(CertificationKey::new(equipment_id, standard_id), record)
        {
            Ok(()) => {
                info!("Equipment certified");
                Ok(())
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Failed to certify equipment");
                Err(e)
            }
        }
    }

    pub fn is_certified(&self, equipment_id: &str, standard_id: &str) -> bool {
        self.get_certification_details(equipment_id, standard_id)
            .is_some_and(|record| record.certified)
    }

    pub fn get_certification_details(
        &self,
        equipment_id: &str,
        standard_id: &str,
    ) -> Option<CertificationRecord> {
        self.certifications
            .get(&CertificationKey::new(equipment_id, standard_id))
            .cloned()
    }
}
