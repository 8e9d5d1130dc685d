use serde_json::json;

use crate::api::CardService;
use crate::error::{CardError, Result};

use super::format_card_line;
use super::interactive::confirm;

/// Delete a card by id, prompting unless `force` is set
pub async fn cmd_delete(
    service: &dyn CardService,
    id: u64,
    force: bool,
    output_json: bool,
) -> Result<()> {
    let cards = service.fetch_cards().await?;
    let card = cards
        .into_iter()
        .find(|card| card.id == id)
        .ok_or(CardError::CardNotFound(id))?;

    if !force {
        let prompt = format!("Delete {}", format_card_line(&card));
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    service.delete_card(id).await?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({"id": id, "deleted": true}))?
        );
        return Ok(());
    }

    println!("Deleted card #{}: {}", id, card.name);
    Ok(())
}
