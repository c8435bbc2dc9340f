mod admin_gate;
mod certification_registry;
mod error;
mod identity;
mod manufacturer_registry;
mod registry;
pub mod config;
pub mod testing;

pub use admin_gate::AdminGate;
pub use certification_registry::{CertificationKey, CertificationRecord, CertificationRegistry};
pub use error::{ERR_ALREADY_EXISTS, ERR_NOT_FOUND, ERR_UNAUTHORIZED, RegistryError};
pub use identity::{BlockHeight, Identity};
pub use manufacturer_registry::ManufacturerRegistry;
pub use registry::{AccessControlledRegistry, InsertPolicy, PolicyMap, RemovePolicy};
