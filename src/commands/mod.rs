mod browse;
mod config;
mod create;
mod delete;
pub mod interactive;
mod ls;
mod update;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use delete::cmd_delete;
pub use ls::cmd_ls;
pub use update::{UpdateOptions, cmd_update};

use owo_colors::OwoColorize;

use crate::types::CardRecord;

/// Format a card for single-line display
pub fn format_card_line(card: &CardRecord) -> String {
    let state = if card.enabled {
        "enabled".green().to_string()
    } else {
        "disabled".dimmed().to_string()
    };
    format!(
        "{} {} ({}) [{}]",
        format!("#{}", card.id).cyan(),
        card.name,
        card.bank_name,
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_line_contains_fields() {
        let card = CardRecord {
            id: 7,
            name: "Visa Gold".to_string(),
            bank_name: "Acme Bank".to_string(),
            enabled: true,
            created_at: "1/15/2024".to_string(),
        };
        let line = format_card_line(&card);
        assert!(line.contains("#7"));
        assert!(line.contains("Visa Gold"));
        assert!(line.contains("Acme Bank"));
        assert!(line.contains("enabled"));
    }
}
