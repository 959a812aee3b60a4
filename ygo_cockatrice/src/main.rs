//! YGO Cockatrice - Yu-Gi-Oh! card database export
//!
//! Downloads all cards from YGOPRODeck and writes a Cockatrice card database.
//! Exit status: 0 when the file was written, 1 on error, 2 when the API
//! returned nothing to export.

use clap::Parser;
use std::path::PathBuf;
use ygo_cockatrice::config::{
    parse_namespace, DEFAULT_CARDS_URL, DEFAULT_NAMESPACE, DEFAULT_OUTPUT, DEFAULT_SETS_URL,
};
use ygo_cockatrice::{run, Endpoints, ExportConfig, ExportOutcome};

const EXIT_NOTHING_EXPORTED: i32 = 2;

/// Export the YGOPRODeck card database as a Cockatrice card database XML file
#[derive(Parser, Debug)]
#[command(name = "ygo_cockatrice")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the XML file to write (overwritten if it exists)
    #[arg(short, long, env = "YGO_COCKATRICE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Card endpoint URL
    #[arg(long, env = "YGO_CARDS_URL", default_value = DEFAULT_CARDS_URL)]
    cards_url: String,

    /// Set endpoint URL
    #[arg(long, env = "YGO_SETS_URL", default_value = DEFAULT_SETS_URL)]
    sets_url: String,

    /// UUID namespace for print identifiers
    #[arg(long, env = "YGO_UUID_NAMESPACE", default_value_t = DEFAULT_NAMESPACE.to_string())]
    namespace: String,
}

fn main() {
    // Set RUST_LOG to control the log level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let namespace = match parse_namespace(&args.namespace) {
        Ok(namespace) => namespace,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = ExportConfig {
        endpoints: Endpoints {
            cards_url: args.cards_url,
            sets_url: args.sets_url,
        },
        namespace,
        output: args.output,
    };

    log::info!("Starting ygo_cockatrice...");
    log::info!("Output path: {}", config.output.display());

    match run(&config) {
        Ok(ExportOutcome::Written(summary)) => {
            log::info!(
                "Exported {} cards with {} set entries ({} sets fetched) to {}",
                summary.cards,
                summary.set_entries,
                summary.sets_fetched,
                summary.path.display()
            );
        }
        Ok(ExportOutcome::Skipped(reason)) => {
            log::warn!("Nothing exported: {}", reason);
            std::process::exit(EXIT_NOTHING_EXPORTED);
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
