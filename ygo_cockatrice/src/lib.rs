//! YGO Cockatrice - Yu-Gi-Oh! card database export
//!
//! Fetches the YGOPRODeck card list and writes it as a Cockatrice (v4) card
//! database XML file.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod identifier;
pub mod mapper;
pub mod sanitize;
pub mod writer;
pub mod ygoprodeck;

pub use config::{Endpoints, ExportConfig};
pub use document::{build_document, CardDatabase};
pub use error::{ExportError, Result};
pub use export::{export_with, run, ExportOutcome, ExportSummary, SkipReason};
pub use identifier::IdGenerator;
pub use mapper::{map_card, CardElement, PropBlock, SetEntry};
pub use writer::{render, write_document};
pub use ygoprodeck::YgoProDeckClient;
