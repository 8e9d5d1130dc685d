//! Substring filtering over the card list.

use crate::types::CardRecord;

/// Filter cards by case-insensitive substring match on the card name or the
/// bank name.
///
/// An empty query returns every card. Matching cards keep their relative
/// order and the input list is never modified.
pub fn filter_cards(cards: &[CardRecord], query: &str) -> Vec<CardRecord> {
    if query.is_empty() {
        return cards.to_vec();
    }

    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| {
            card.name.to_lowercase().contains(&needle)
                || card.bank_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
