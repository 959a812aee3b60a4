//! Tests for deterministic print identifiers

use crate::config::DEFAULT_NAMESPACE;
use crate::identifier::IdGenerator;
use std::collections::HashSet;
use uuid::{Uuid, Version};

#[test]
fn test_same_key_same_uuid() {
    let ids = IdGenerator::default();
    assert_eq!(ids.generate("46986414"), ids.generate("46986414"));
}

#[test]
fn test_stable_across_instances() {
    let first = IdGenerator::new(DEFAULT_NAMESPACE);
    let second = IdGenerator::default();
    assert_eq!(first.generate("1"), second.generate("1"));
}

#[test]
fn test_matches_uuid_v5() {
    let ids = IdGenerator::default();
    let id = ids.generate("1");

    assert_eq!(id, Uuid::new_v5(&DEFAULT_NAMESPACE, b"1"));
    assert_eq!(id.get_version(), Some(Version::Sha1));
}

#[test]
fn test_namespace_changes_output() {
    let default = IdGenerator::default();
    let other = IdGenerator::new(Uuid::NAMESPACE_URL);

    assert_eq!(other.namespace(), Uuid::NAMESPACE_URL);
    assert_ne!(default.generate("1"), other.generate("1"));
}

#[test]
fn test_no_collisions_over_many_keys() {
    let ids = IdGenerator::default();
    let generated: HashSet<Uuid> = (0..5000).map(|n| ids.generate(&n.to_string())).collect();

    assert_eq!(generated.len(), 5000);
}

#[test]
fn test_order_independent() {
    let ids = IdGenerator::default();
    let forward: Vec<Uuid> = (0..100).map(|n| ids.generate(&n.to_string())).collect();
    let mut backward: Vec<Uuid> = (0..100).rev().map(|n| ids.generate(&n.to_string())).collect();
    backward.reverse();

    assert_eq!(forward, backward);
}
