//! Client for the card catalog service.
//!
//! The service speaks camelCase JSON with a nested bank object; everything
//! here flattens that into [`CardRecord`]s for the rest of the program.
//! Callers depend on the [`CardService`] trait so tests can substitute an
//! in-memory fake for the HTTP client.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CardDraft, CardRecord, format_display_date};

pub use http::HttpCardService;

/// One card as the service returns it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCard {
    pub card_id: u64,
    pub name: String,
    pub bank: BankRef,
    pub enabled: bool,
    pub created_at: String,
}

/// Nested bank object on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct BankRef {
    pub name: String,
}

/// Envelope for the card collection response
#[derive(Debug, Clone, Deserialize)]
pub struct CardsEnvelope {
    pub cards: Vec<ApiCard>,
}

/// Body for create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub name: String,
    pub bank_name: String,
    pub enabled: bool,
}

/// Response to a create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardResponse {
    pub card_id: u64,
}

impl ApiCard {
    /// Flatten into the client's display record
    pub fn into_record(self) -> CardRecord {
        CardRecord {
            id: self.card_id,
            name: self.name,
            bank_name: self.bank.name,
            enabled: self.enabled,
            created_at: format_display_date(&self.created_at),
        }
    }
}

impl From<&CardDraft> for CardPayload {
    fn from(draft: &CardDraft) -> Self {
        CardPayload {
            name: draft.name.clone(),
            bank_name: draft.bank_name.clone(),
            enabled: draft.enabled,
        }
    }
}

/// Operations the card service exposes
#[async_trait::async_trait]
pub trait CardService: Send + Sync {
    /// Fetch the full card collection, flattened for display
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>>;

    /// Create a card; returns the id assigned by the service
    async fn add_card(&self, payload: &CardPayload) -> Result<u64>;

    /// Overwrite the card with the given id
    async fn update_card(&self, id: u64, payload: &CardPayload) -> Result<()>;

    /// Delete the card with the given id
    async fn delete_card(&self, id: u64) -> Result<()>;
}
