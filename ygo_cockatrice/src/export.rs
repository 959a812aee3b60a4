//! The export run: fetch, map, render, write

use crate::config::ExportConfig;
use crate::document::build_document;
use crate::error::Result;
use crate::identifier::IdGenerator;
use crate::writer::write_document;
use crate::ygoprodeck::YgoProDeckClient;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a run ended without writing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoCards,
    NoSets,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoCards => write!(f, "no cards were fetched"),
            SkipReason::NoSets => write!(f, "no sets were fetched"),
        }
    }
}

/// Counts for a written document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub cards: usize,
    pub set_entries: usize,
    pub sets_fetched: usize,
}

/// Result of a run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(ExportSummary),
    Skipped(SkipReason),
}

/// Run one export with the given configuration
pub fn run(config: &ExportConfig) -> Result<ExportOutcome> {
    let client = YgoProDeckClient::new(config.endpoints.clone());
    let ids = IdGenerator::new(config.namespace);
    export_with(&client, &ids, &config.output)
}

/// Run one export against an existing client
///
/// Either collection coming back empty ends the run before anything is
/// mapped; the output file is left untouched.
pub fn export_with(
    client: &YgoProDeckClient,
    ids: &IdGenerator,
    output: &Path,
) -> Result<ExportOutcome> {
    let records = client.fetch_cards()?;
    if records.is_empty() {
        log::warn!("No cards fetched, skipping document generation");
        return Ok(ExportOutcome::Skipped(SkipReason::NoCards));
    }

    let sets = client.fetch_sets()?;
    if sets.is_empty() {
        log::warn!("No sets fetched, skipping document generation");
        return Ok(ExportOutcome::Skipped(SkipReason::NoSets));
    }

    let database = build_document(records, ids)?;
    write_document(&database, output)?;

    Ok(ExportOutcome::Written(ExportSummary {
        path: output.to_path_buf(),
        cards: database.cards.len(),
        set_entries: database.set_entry_count(),
        sets_fetched: sets.len(),
    }))
}
