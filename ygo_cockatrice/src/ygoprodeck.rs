//! YGOPRODeck API client
//!
//! Uses blocking reqwest: the export makes two sequential requests and nothing
//! else, so there is no runtime to drive.

use crate::config::Endpoints;
use crate::error::Result;
use reqwest::blocking::Client;
use serde_json::Value;
use ygo_common::{CardsResponse, SourceSet};

const USER_AGENT: &str = "ygo_cockatrice/1.0";

/// Client for the card and set endpoints
pub struct YgoProDeckClient {
    client: Client,
    endpoints: Endpoints,
}

impl YgoProDeckClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    /// Fetch every card as a raw record
    ///
    /// A non-success status is logged and yields an empty list.
    pub fn fetch_cards(&self) -> Result<Vec<Value>> {
        log::info!("Fetching cards from {}", self.endpoints.cards_url);

        let Some(body) = self.get(&self.endpoints.cards_url)? else {
            return Ok(Vec::new());
        };
        let response: CardsResponse = serde_json::from_str(&body)?;

        log::info!("Fetched {} cards", response.data.len());
        Ok(response.data)
    }

    /// Fetch the set list
    ///
    /// A non-success status is logged and yields an empty list.
    pub fn fetch_sets(&self) -> Result<Vec<SourceSet>> {
        log::info!("Fetching sets from {}", self.endpoints.sets_url);

        let Some(body) = self.get(&self.endpoints.sets_url)? else {
            return Ok(Vec::new());
        };
        let sets: Vec<SourceSet> = serde_json::from_str(&body)?;

        log::info!("Fetched {} sets", sets.len());
        Ok(sets)
    }

    /// Body of a successful GET, `None` on any other status
    fn get(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Failed to fetch {}: {}", url, status);
            return Ok(None);
        }

        Ok(Some(response.text()?))
    }
}

#[cfg(test)]
#[path = "ygoprodeck_tests.rs"]
mod tests;
