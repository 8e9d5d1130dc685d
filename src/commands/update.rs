use serde_json::json;

use crate::api::{CardPayload, CardService};
use crate::error::{CardError, Result};
use crate::types::CardRecord;

use super::format_card_line;

/// Field overrides for an update. Unset fields keep the card's current
/// value, the same way the edit form prefills before overwriting.
#[derive(Default)]
pub struct UpdateOptions {
    pub name: Option<String>,
    pub bank: Option<String>,
    pub enabled: Option<bool>,
}

/// Update a card by id
pub async fn cmd_update(
    service: &dyn CardService,
    id: u64,
    options: UpdateOptions,
    output_json: bool,
) -> Result<()> {
    let cards = service.fetch_cards().await?;
    let current = cards
        .into_iter()
        .find(|card| card.id == id)
        .ok_or(CardError::CardNotFound(id))?;

    let payload = merge_update(&current, &options);
    service.update_card(id, &payload).await?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "id": id,
                "name": payload.name,
                "bankName": payload.bank_name,
                "enabled": payload.enabled,
            }))?
        );
        return Ok(());
    }

    let record = CardRecord {
        id,
        name: payload.name,
        bank_name: payload.bank_name,
        enabled: payload.enabled,
        created_at: current.created_at,
    };
    println!("Updated {}", format_card_line(&record));
    Ok(())
}

fn merge_update(current: &CardRecord, options: &UpdateOptions) -> CardPayload {
    CardPayload {
        name: options.name.clone().unwrap_or_else(|| current.name.clone()),
        bank_name: options.bank.clone().unwrap_or_else(|| current.bank_name.clone()),
        enabled: options.enabled.unwrap_or(current.enabled),
    }
}
