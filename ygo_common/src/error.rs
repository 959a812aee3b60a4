//! Error types for source records

use thiserror::Error;

/// A single card record that could not be read
///
/// Every variant carries the position of the card in the fetched list so the
/// offending record can be found in the payload.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record is not an object or a field has an impossible type
    #[error("card #{index} ({name}) could not be decoded: {source}")]
    Decode {
        index: usize,
        name: String,
        #[source]
        source: serde_json::Error,
    },
    /// The `card_images` container is absent
    #[error("card #{index} ({name}, id {id}) has no card_images list")]
    MissingImages {
        index: usize,
        id: String,
        name: String,
    },
    /// A print entry lacks its id or image URL
    #[error("card #{index} ({name}, id {id}) print #{print}: {reason}")]
    InvalidPrint {
        index: usize,
        id: String,
        name: String,
        print: usize,
        reason: &'static str,
    },
}
