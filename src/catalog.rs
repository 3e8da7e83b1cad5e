//! The built-in flag catalog.
//!
//! Flag definitions live in `flags.yaml`, embedded at compile time and
//! deserialized once on first access. Lookups are case-insensitive.

use crate::model::FlagDefinition;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

const CATALOG_YAML: &str = include_str!("flags.yaml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("the flag {name:?} doesn't exist")]
    UnknownFlag { name: String },
}

fn catalog() -> &'static BTreeMap<String, FlagDefinition> {
    static CATALOG: OnceLock<BTreeMap<String, FlagDefinition>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        // The catalog is compiled into the binary; a parse failure is a
        // build defect, not a runtime condition, and is caught by tests.
        let flags: BTreeMap<String, FlagDefinition> =
            serde_yaml::from_str(CATALOG_YAML).expect("embedded flag catalog is valid YAML");
        debug!(count = flags.len(), "loaded flag catalog");
        flags
    })
}

/// Looks up a flag by name, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Result<&'static FlagDefinition, CatalogError> {
    let normalized = name.trim().to_lowercase();
    catalog()
        .get(&normalized)
        .ok_or(CatalogError::UnknownFlag { name: normalized })
}

/// All catalog entries in name order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static FlagDefinition)> {
    catalog().iter().map(|(name, flag)| (name.as_str(), flag))
}

/// Flag names in sorted order, for help text and shell completion.
pub fn names() -> Vec<&'static str> {
    catalog().keys().map(String::as_str).collect()
}

/// Picks a random catalog entry.
pub fn random() -> (&'static str, &'static FlagDefinition) {
    let entries: Vec<(&str, &FlagDefinition)> = all().collect();
    // The unwrap is safe because the embedded catalog is never empty,
    // which the catalog tests enforce.
    entries.choose(&mut rand::rng()).copied().unwrap()
}
