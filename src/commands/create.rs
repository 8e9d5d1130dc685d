use serde_json::json;

use crate::api::{CardPayload, CardService};
use crate::error::Result;
use crate::types::{CardRecord, today_display_date};

use super::format_card_line;

/// Options for creating a card
pub struct CreateOptions {
    pub name: String,
    pub bank: String,
    /// Create the card disabled instead of the default enabled
    pub disabled: bool,
}

/// Create a card and print the id the service assigned
pub async fn cmd_create(
    service: &dyn CardService,
    options: CreateOptions,
    output_json: bool,
) -> Result<()> {
    let payload = CardPayload {
        name: options.name,
        bank_name: options.bank,
        enabled: !options.disabled,
    };
    let id = service.add_card(&payload).await?;

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
        created_at: today_display_date(),
    };
    println!("Created {}", format_card_line(&record));
    Ok(())
}
