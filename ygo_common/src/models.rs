//! YGOPRODeck API payloads
//!
//! The card endpoint is loosely typed: numeric fields may be missing, null, or
//! occasionally strings. Cards are therefore kept as raw JSON until they are
//! decoded one at a time with [`SourceCard::from_record`], so a broken record
//! can be reported by its position instead of failing the whole payload.

use crate::error::RecordError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Card endpoint response (`cardinfo.php`)
#[derive(Debug, Deserialize)]
pub struct CardsResponse {
    pub data: Vec<Value>,
}

/// One card as delivered by the card endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceCard {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    /// Free-form type line, e.g. "Normal Monster" or "Spell Card"
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub attribute: Option<String>,
    /// Level, or rank for XYZ monsters
    #[serde(default, deserialize_with = "lenient_int")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub atk: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub def: Option<i64>,
    #[serde(default)]
    pub card_images: Option<Vec<CardImage>>,
}

/// One print-appearance of a card
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardImage {
    /// Print id, a number in practice but kept raw so strings work too
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A validated print-appearance: natural key plus picture URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Print<'a> {
    pub key: String,
    pub image_url: &'a str,
}

/// One entry of the sets endpoint (`cardsets.php`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceSet {
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub set_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub num_of_cards: Option<i64>,
    #[serde(default)]
    pub tcg_date: Option<String>,
}

impl SourceCard {
    /// Decode the card at `index` of the fetched list
    pub fn from_record(index: usize, record: Value) -> Result<Self, RecordError> {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unnamed")
            .to_string();

        serde_json::from_value(record).map_err(|source| RecordError::Decode {
            index,
            name,
            source,
        })
    }

    /// Name used in log lines and errors
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Konami id as text, empty when absent
    pub fn id_text(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    /// Validated print-appearances in source order
    ///
    /// A missing `card_images` container, or a print without id or URL, is a
    /// structural problem with this card and is reported as such. An empty
    /// list is fine.
    pub fn prints(&self, index: usize) -> Result<Vec<Print<'_>>, RecordError> {
        let images = self
            .card_images
            .as_ref()
            .ok_or_else(|| RecordError::MissingImages {
                index,
                id: self.id_text(),
                name: self.display_name().to_string(),
            })?;

        images
            .iter()
            .enumerate()
            .map(|(print, image)| {
                let invalid = |reason| RecordError::InvalidPrint {
                    index,
                    id: self.id_text(),
                    name: self.display_name().to_string(),
                    print,
                    reason,
                };

                let key = image
                    .print_key()
                    .ok_or_else(|| invalid("missing print id"))?;
                let image_url = image
                    .image_url
                    .as_deref()
                    .ok_or_else(|| invalid("missing image_url"))?;

                Ok::<_, RecordError>(Print { key, image_url })
            })
            .collect()
    }
}

impl CardImage {
    /// Print id stringified, whether the API sent a number or a string
    pub fn print_key(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

/// Accepts integers and integer strings; anything else counts as absent
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(int_from_value))
}

fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Null => None,
        other => {
            log::debug!("Treating non-numeric value {} as unknown", other);
            None
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
