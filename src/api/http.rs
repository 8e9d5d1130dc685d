//! HTTP implementation of the card service client.

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{CardError, Result};
use crate::types::CardRecord;

use super::{ApiCard, CardPayload, CardService, CardsEnvelope, CreateCardResponse};

/// Plain JSON REST client for the card service.
///
/// Endpoints are `{base}/cards` for the collection and `{base}/cards/{id}`
/// for a single card, with the base URL taken from configuration.
pub struct HttpCardService {
    client: Client,
    base_url: String,
}

impl HttpCardService {
    /// Create a client for the configured service.
    ///
    /// Configures the HTTP client with 30s connect timeout and 60s total timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url(),
        })
    }

    fn cards_url(&self) -> String {
        format!("{}/cards", self.base_url)
    }

    fn card_url(&self, id: u64) -> String {
        format!("{}/cards/{}", self.base_url, id)
    }
}

/// Turn a non-success response into a typed error carrying the body text
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(CardError::ApiStatus {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.to_string()
        } else {
            message
        },
    })
}

#[async_trait::async_trait]
impl CardService for HttpCardService {
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>> {
        let response = self.client.get(self.cards_url()).send().await?;
        let envelope: CardsEnvelope = check_status(response).await?.json().await?;
        Ok(envelope
            .cards
            .into_iter()
            .map(ApiCard::into_record)
            .collect())
    }

    async fn add_card(&self, payload: &CardPayload) -> Result<u64> {
        let response = self
            .client
            .post(self.cards_url())
            .json(payload)
            .send()
            .await?;
        let created: CreateCardResponse = check_status(response).await?.json().await?;
        Ok(created.card_id)
    }

    async fn update_card(&self, id: u64, payload: &CardPayload) -> Result<()> {
        let response = self
            .client
            .put(self.card_url(id))
            .json(payload)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_card(&self, id: u64) -> Result<()> {
        let response = self.client.delete(self.card_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
