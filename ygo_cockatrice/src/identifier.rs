//! Deterministic print identifiers
//!
//! Cockatrice wants a uuid per set entry but the API does not version prints.
//! The uuid is derived from the print id alone (UUID v5 under a fixed
//! namespace), so it is identical across runs and independent of fetch order.

use crate::config::DEFAULT_NAMESPACE;
use uuid::Uuid;

/// Name-based uuid generator bound to one namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    namespace: Uuid,
}

impl IdGenerator {
    pub fn new(namespace: Uuid) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Uuid for a natural key
    pub fn generate(&self, key: &str) -> Uuid {
        Uuid::new_v5(&self.namespace, key.as_bytes())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;
