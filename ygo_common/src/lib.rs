//! Shared types for the YGOPRODeck card API
//!
//! Source-side records (cards, prints, sets) as the API delivers them, plus the
//! per-record error type used when a card cannot be taken apart.

pub mod error;
pub mod models;

pub use error::RecordError;
pub use models::{CardImage, CardsResponse, Print, SourceCard, SourceSet};
