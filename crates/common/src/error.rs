use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ERR_UNAUTHORIZED: u32 = 100;
pub const ERR_ALREADY_EXISTS: u32 = 101;
pub const ERR_NOT_FOUND: u32 = 102;

/// Failures returned by registry mutations.
///
/// Callers branch on [`RegistryError::code`], which is stable across releases.
/// `AlreadyVerified` and `AlreadyCertified` intentionally share code 101.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryError {
    #[error("Caller is not authorized to perform this operation")]
    Unauthorized,
    #[error("Manufacturer is already verified")]
    AlreadyVerified,
    #[error("Equipment is already certified for this standard")]
    AlreadyCertified,
    #[error("Entry not found")]
    NotFound,
}

impl RegistryError {
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized => ERR_UNAUTHORIZED,
            RegistryError::AlreadyVerified | RegistryError::AlreadyCertified => ERR_ALREADY_EXISTS,
            RegistryError::NotFound => ERR_NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(RegistryError::Unauthorized.code(), 100);
        assert_eq!(RegistryError::AlreadyVerified.code(), 101);
        assert_eq!(RegistryError::AlreadyCertified.code(), 101);
        assert_eq!(RegistryError::NotFound.code(), 102);
    }
}
