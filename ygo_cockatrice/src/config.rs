//! Run configuration: endpoints, identifier namespace, output path

use crate::error::{ExportError, Result};
use std::path::PathBuf;
use uuid::{uuid, Uuid};

/// YGOPRODeck card endpoint
pub const DEFAULT_CARDS_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";
/// YGOPRODeck sets endpoint
pub const DEFAULT_SETS_URL: &str = "https://db.ygoprodeck.com/api/v7/cardsets.php";
/// Output file written in the working directory
pub const DEFAULT_OUTPUT: &str = "ygopro_cockatrice.xml";
/// Namespace for print uuids. Changing it changes every uuid in the output.
pub const DEFAULT_NAMESPACE: Uuid = uuid!("6f1c2a3e-5b7d-4e8f-9a0b-1c2d3e4f5a6b");

/// The two source endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub cards_url: String,
    pub sets_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            cards_url: DEFAULT_CARDS_URL.to_string(),
            sets_url: DEFAULT_SETS_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Both endpoints under one base URL, using the API's path names
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            cards_url: format!("{base}/cardinfo.php"),
            sets_url: format!("{base}/cardsets.php"),
        }
    }
}

/// Everything one export run needs
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub endpoints: Endpoints,
    pub namespace: Uuid,
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            namespace: DEFAULT_NAMESPACE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Parse a namespace given as text
pub fn parse_namespace(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|e| ExportError::InvalidNamespace(format!("{value}: {e}")))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
