//! Card record mapping
//!
//! Turns one YGOPRODeck card into the `<card>` structure Cockatrice expects.
//! Every function here builds and returns a finished value; nothing is written
//! into a shared tree, so each rule can be checked on its own.

use crate::document::CATALOG_NAME;
use crate::identifier::IdGenerator;
use crate::sanitize::{sanitize_description, xml_safe};
use serde_json::Value;
use uuid::Uuid;
use ygo_common::{RecordError, SourceCard};

/// Level placeholder for cards without one (spells, traps, links)
pub const MISSING_LEVEL: &str = "None";
/// Attribute placeholder for cards without one
pub const DEFAULT_ATTRIBUTE: &str = "NORMAL";
/// Stat placeholder for `?` ATK/DEF
pub const UNKNOWN_STAT: &str = "?";

/// A mapped `<card>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub name: String,
    pub text: String,
    pub prop: PropBlock,
    pub sets: Vec<SetEntry>,
}

/// The `<prop>` block of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropBlock {
    pub archetype: Option<String>,
    pub cmc: String,
    pub colors: String,
    pub konami_id: String,
    pub maintype: String,
    /// Full type line, only kept when `maintype` was normalized to "Monster"
    pub complete_card_type: Option<String>,
    pub pt: Option<String>,
    pub card_type: String,
}

/// One `<set>` entry of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEntry {
    pub pic_url: String,
    pub uuid: Uuid,
    pub label: String,
}

impl PropBlock {
    /// Child elements in schema order, optional ones left out
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::with_capacity(8);

        if let Some(archetype) = &self.archetype {
            entries.push(("Archetype", archetype.as_str()));
        }
        entries.push(("cmc", self.cmc.as_str()));
        entries.push(("colors", self.colors.as_str()));
        entries.push(("Konami_ID", self.konami_id.as_str()));
        entries.push(("maintype", self.maintype.as_str()));
        if let Some(complete) = &self.complete_card_type {
            entries.push(("Complete_Card_type", complete.as_str()));
        }
        if let Some(pt) = &self.pt {
            entries.push(("pt", pt.as_str()));
        }
        entries.push(("type", self.card_type.as_str()));

        entries
    }
}

/// Decode and map the raw record at `index`
pub fn map_record(
    index: usize,
    record: Value,
    ids: &IdGenerator,
) -> Result<CardElement, RecordError> {
    let card = SourceCard::from_record(index, record)?;
    map_card(index, &card, ids)
}

/// Map one decoded card
pub fn map_card(
    index: usize,
    card: &SourceCard,
    ids: &IdGenerator,
) -> Result<CardElement, RecordError> {
    Ok(CardElement {
        name: xml_safe(card.name.as_deref().unwrap_or_default()).into_owned(),
        text: sanitize_description(card.desc.as_deref()),
        prop: map_prop(card),
        sets: map_sets(index, card, ids)?,
    })
}

/// Build the property block
pub fn map_prop(card: &SourceCard) -> PropBlock {
    let type_line = card.card_type.as_deref().unwrap_or_default();
    let (maintype, complete_card_type) = classify_type(type_line);

    PropBlock {
        archetype: card.archetype.clone().filter(|a| !a.is_empty()),
        cmc: card
            .level
            .map(|level| level.to_string())
            .unwrap_or_else(|| MISSING_LEVEL.to_string()),
        colors: card
            .attribute
            .clone()
            .unwrap_or_else(|| DEFAULT_ATTRIBUTE.to_string()),
        konami_id: card.id_text(),
        maintype,
        complete_card_type,
        pt: is_monster(type_line).then(|| format_pt(card.atk, card.def)),
        card_type: card.race.clone().unwrap_or_default(),
    }
}

/// One entry per print, in source order
pub fn map_sets(
    index: usize,
    card: &SourceCard,
    ids: &IdGenerator,
) -> Result<Vec<SetEntry>, RecordError> {
    let prints = card.prints(index)?;

    Ok(prints
        .into_iter()
        .map(|print| SetEntry {
            pic_url: print.image_url.to_string(),
            uuid: ids.generate(&print.key),
            label: CATALOG_NAME.to_string(),
        })
        .collect())
}

/// Main type and, when normalized, the original type line
///
/// Case-sensitive on "Monster".
pub fn classify_type(type_line: &str) -> (String, Option<String>) {
    if type_line.contains("Monster") {
        ("Monster".to_string(), Some(type_line.to_string()))
    } else {
        (type_line.to_string(), None)
    }
}

/// Whether the card gets an ATK/DEF pair. Case-insensitive, unlike
/// [`classify_type`].
pub fn is_monster(type_line: &str) -> bool {
    type_line.to_lowercase().contains("monster")
}

/// "ATK/DEF" with "?" for unknown values
pub fn format_pt(atk: Option<i64>, def: Option<i64>) -> String {
    let stat = |value: Option<i64>| {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| UNKNOWN_STAT.to_string())
    };
    format!("{}/{}", stat(atk), stat(def))
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
