//! Document assembly
//!
//! Composes the root element, the sets catalog and the mapped cards into a
//! [`CardDatabase`]. Cards keep the order of the fetched list.

use crate::identifier::IdGenerator;
use crate::mapper::{map_record, CardElement};
use serde_json::Value;
use ygo_common::RecordError;

pub const ROOT_ELEMENT: &str = "cockatrice_carddatabase";
pub const DATABASE_VERSION: &str = "4";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str =
    "https://raw.githubusercontent.com/Cockatrice/Cockatrice/master/doc/carddatabase_v4/cards.xsd";

/// Short name of the single catalog set; every card's set entries point here
pub const CATALOG_NAME: &str = "YGOPRODeck";
pub const CATALOG_LONG_NAME: &str = "YGOPRODeck Yu-Gi-Oh! Card Database";
pub const CATALOG_SET_TYPE: &str = "Custom";

/// An entry of the `<sets>` catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSet {
    pub name: &'static str,
    pub longname: &'static str,
    pub settype: &'static str,
}

/// The whole document, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDatabase {
    pub sets: Vec<CatalogSet>,
    pub cards: Vec<CardElement>,
}

impl CardDatabase {
    /// Attributes of the root element
    pub fn root_attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("version", DATABASE_VERSION),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ]
    }

    /// Total number of `<set>` entries across all cards
    pub fn set_entry_count(&self) -> usize {
        self.cards.iter().map(|card| card.sets.len()).sum()
    }
}

/// The fixed catalog entry
pub fn catalog() -> CatalogSet {
    CatalogSet {
        name: CATALOG_NAME,
        longname: CATALOG_LONG_NAME,
        settype: CATALOG_SET_TYPE,
    }
}

/// Wrap already mapped cards into a document
pub fn assemble(cards: Vec<CardElement>) -> CardDatabase {
    CardDatabase {
        sets: vec![catalog()],
        cards,
    }
}

/// Map every raw card record and assemble the document
///
/// Stops at the first record that cannot be mapped; a partial document is
/// never returned.
pub fn build_document(records: Vec<Value>, ids: &IdGenerator) -> Result<CardDatabase, RecordError> {
    let cards = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| map_record(index, record, ids))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Mapped {} cards", cards.len());
    Ok(assemble(cards))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
