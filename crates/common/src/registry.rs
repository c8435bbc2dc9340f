use std::{collections::BTreeMap, fmt::Debug};

use tracing::debug;

use crate::{AdminGate, Identity, RegistryError};

/// What to do when inserting a key that is already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPolicy {
    /// Fail with the given error and leave the existing entry alone.
    Reject(RegistryError),
    /// Report success and keep the existing entry.
    Idempotent,
}

/// What to do when removing a key that is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    /// Fail with [`RegistryError::NotFound`].
    #[default]
    Reject,
    /// Report success.
    Idempotent,
}

/// A keyed map that applies duplicate and missing-key policies but no authorization.
#[derive(Clone, Debug)]
pub struct PolicyMap<K, V> {
    entries: BTreeMap<K, V>,
    insert_policy: InsertPolicy,
    remove_policy: RemovePolicy,
}

impl<K, V> PolicyMap<K, V>
where
    K: Ord + Clone + Debug,
{
    /// Missing keys are rejected on removal unless [`PolicyMap::with_remove_policy`] says otherwise.
    pub fn new(insert_policy: InsertPolicy) -> Self {
        Self {
            entries: BTreeMap::new(),
            insert_policy,
            remove_policy: RemovePolicy::default(),
        }
    }

    pub fn with_remove_policy(mut self, remove_policy: RemovePolicy) -> Self {
        self.remove_policy = remove_policy;
        self
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<(), RegistryError> {
        if self.entries.contains_key(&key) {
            return match self.insert_policy {
                InsertPolicy::Reject(err) => Err(err),
                InsertPolicy::Idempotent => {
                    debug!(key = ?key, "Key already present, keeping existing entry");
                    Ok(())
                }
            };
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub fn remove(&mut self, key: &K) -> Result<(), RegistryError> {
        match (self.entries.remove(key), self.remove_policy) {
            (Some(_), _) => Ok(()),
            (None, RemovePolicy::Idempotent) => {
                debug!(key = ?key, "Key already absent");
                Ok(())
            }
            (None, RemovePolicy::Reject) => Err(RegistryError::NotFound),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A [`PolicyMap`] whose mutations are reserved for the admin.
///
/// Every check runs before any mutation, so a failed call never leaves the map
/// or the admin half-updated.
#[derive(Clone, Debug)]
pub struct AccessControlledRegistry<K, V> {
    gate: AdminGate,
    entries: PolicyMap<K, V>,
}

impl<K, V> AccessControlledRegistry<K, V>
where
    K: Ord + Clone + Debug,
{
    pub fn new(admin: Identity, insert_policy: InsertPolicy, remove_policy: RemovePolicy) -> Self {
        Self {
            gate: AdminGate::new(admin),
            entries: PolicyMap::new(insert_policy).with_remove_policy(remove_policy),
        }
    }

    pub fn gate(&self) -> &AdminGate {
        &self.gate
    }

    pub fn is_admin(&self, caller: &Identity) -> bool {
        self.gate.is_admin(caller)
    }

    pub fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.gate.transfer_admin(caller, new_admin)
    }

    pub fn insert(&mut self, caller: &Identity, key: K, value: V) -> Result<(), RegistryError> {
        self.gate.authorize(caller)?;
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, caller: &Identity, key: &K) -> Result<(), RegistryError> {
        self.gate.authorize(caller)?;
        self.entries.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
