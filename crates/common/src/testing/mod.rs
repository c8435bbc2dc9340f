#![cfg(any(test, feature = "testing"))]

// Testing utilities for equipcert-common
//
// Shared identities and pre-seeded registries so that the web crate and the
// unit tests here exercise the same scenarios without repeating setup.

pub mod fixtures;
#[cfg(test)]
pub(crate) mod log_capture;

pub use fixtures::*;
