use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::CardService;
use crate::error::Result;
use crate::filter::filter_cards;
use crate::types::CardRecord;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Bank")]
    bank: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&CardRecord> for CardRow {
    fn from(card: &CardRecord) -> Self {
        CardRow {
            id: card.id,
            bank: card.bank_name.clone(),
            name: card.name.clone(),
            created: card.created_at.clone(),
            enabled: if card.enabled { "yes" } else { "no" }.to_string(),
        }
    }
}

/// List cards, optionally narrowed by a search query
pub async fn cmd_ls(
    service: &dyn CardService,
    search: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let cards = service.fetch_cards().await?;
    let cards = match search {
        Some(query) => filter_cards(&cards, query),
        None => cards,
    };

    if output_json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No cards found.");
        return Ok(());
    }

    let rows: Vec<CardRow> = cards.iter().map(CardRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("\n{} card(s)", cards.len());

    Ok(())
}
