//! Card table integration tests
//!
//! These complement the unit tests in `src/tui/table/model.rs` by driving
//! whole interaction sequences through the public model API: key presses
//! become actions, actions reduce the state, and completion patches land
//! the way the async handlers apply them.

use cardctl::tui::table::model::*;
use cardctl::types::CardRecord;

use iocraft::prelude::{KeyCode, KeyModifiers};

const LIST_HEIGHT: usize = 10;

// ============================================================================
// Test helpers
// ============================================================================

fn mock_card(id: u64, name: &str, bank: &str, enabled: bool) -> CardRecord {
    CardRecord {
        id,
        name: name.to_string(),
        bank_name: bank.to_string(),
        enabled,
        created_at: "1/15/2024".to_string(),
    }
}

fn catalog() -> Vec<CardRecord> {
    vec![
        mock_card(1, "Visa Gold", "Acme Bank", true),
        mock_card(2, "Platinum Rewards", "First National", true),
        mock_card(3, "Gold Cash Back", "Acme Bank", false),
        mock_card(4, "Travel Elite", "Skyline Credit Union", true),
    ]
}

fn loaded_state() -> TableState {
    apply_loaded(TableState::default(), catalog())
}

fn press(state: TableState, code: KeyCode) -> TableState {
    press_with(state, code, KeyModifiers::NONE)
}

fn press_with(state: TableState, code: KeyCode, modifiers: KeyModifiers) -> TableState {
    match key_to_action(code, modifiers, &state) {
        Some(action) => reduce_table_state(state, action, LIST_HEIGHT),
        None => state,
    }
}

fn type_chars(mut state: TableState, text: &str) -> TableState {
    for c in text.chars() {
        state = press(state, KeyCode::Char(c));
    }
    state
}

fn grid_lines(state: &TableState) -> String {
    let vm = compute_table_view_model(state, LIST_HEIGHT);
    vm.grid
        .rows
        .iter()
        .map(|row| {
            format!(
                "{}{} | {} | {} | {} | {}",
                if row.is_selected { "> " } else { "  " },
                row.record.id,
                row.record.bank_name,
                row.record.name,
                row.record.created_at,
                row.enabled_label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Startup and reload
// ============================================================================

#[test]
fn test_initial_load_populates_grid() {
    let state = TableState::default();
    assert!(state.is_loading);

    let state = apply_loaded(state, catalog());
    assert!(!state.is_loading);

    insta::assert_snapshot!(grid_lines(&state), @r"
    > 1 | Acme Bank | Visa Gold | 1/15/2024 | ● on
      2 | First National | Platinum Rewards | 1/15/2024 | ● on
      3 | Acme Bank | Gold Cash Back | 1/15/2024 | ○ off
      4 | Skyline Credit Union | Travel Elite | 1/15/2024 | ● on
    ");
}

#[test]
fn test_failed_load_leaves_empty_grid_running() {
    let state = apply_load_failed(TableState::default());
    assert!(!state.is_loading);
    assert!(!state.should_exit);

    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.grid.row_count, 0);
    assert_eq!(
        vm.empty_message.as_deref(),
        Some("No cards yet. Press 'a' to add one.")
    );
}

#[test]
fn test_reload_keeps_rows_until_fetch_lands() {
    let state = press(loaded_state(), KeyCode::Char('r'));
    assert!(state.is_loading);
    assert_eq!(state.cards.len(), 4);

    let replacement = vec![mock_card(9, "Fresh Card", "New Bank", true)];
    let state = apply_loaded(state, replacement);
    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.cards[0].id, 9);
}

// ============================================================================
// Search narrows the grid on every keystroke
// ============================================================================

#[test]
fn test_search_sequence_narrows_and_restores() {
    let state = press(loaded_state(), KeyCode::Char('/'));
    let state = type_chars(state, "acme");

    insta::assert_snapshot!(grid_lines(&state), @r"
    > 1 | Acme Bank | Visa Gold | 1/15/2024 | ● on
      3 | Acme Bank | Gold Cash Back | 1/15/2024 | ○ off
    ");

    // Backspace widens the match set again
    let state = press(state, KeyCode::Backspace);
    let state = press(state, KeyCode::Backspace);
    let state = press(state, KeyCode::Backspace);
    let state = press(state, KeyCode::Backspace);
    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.grid.row_count, 4);
}

#[test]
fn test_search_esc_clears_query() {
    let state = press(loaded_state(), KeyCode::Char('/'));
    let state = type_chars(state, "gold");
    let state = press(state, KeyCode::Esc);

    assert!(!state.search_focused);
    assert!(state.search_query.is_empty());
    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.grid.row_count, 4);
}

#[test]
fn test_search_enter_keeps_filter_applied() {
    let state = press(loaded_state(), KeyCode::Char('/'));
    let state = type_chars(state, "national");
    let state = press(state, KeyCode::Enter);

    assert!(!state.search_focused);
    assert_eq!(state.search_query, "national");
    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.grid.row_count, 1);
    assert_eq!(vm.header.count_label(), "1 of 4 cards");
}

// ============================================================================
// Create flow
// ============================================================================

#[test]
fn test_create_flow_appends_at_end() {
    // 'a', type a name, Tab, type a bank, submit, then the patch lands
    let state = press(loaded_state(), KeyCode::Char('a'));
    assert!(state.card_modal_open);
    assert!(state.draft.enabled);

    let state = type_chars(state, "Cashback Plus");
    let state = press(state, KeyCode::Tab);
    let state = type_chars(state, "Acme Bank");

    let submitted_draft = state.draft.clone();
    let state = reduce_table_state(state, TableAction::SubmitForm, LIST_HEIGHT);
    // Still open: the service has not answered yet
    assert!(state.card_modal_open);

    let state = apply_created(state, 42, submitted_draft, "8/25/2026".to_string());
    assert!(!state.card_modal_open);

    let last = state.cards.last().unwrap();
    assert_eq!(last.id, 42);
    assert_eq!(last.name, "Cashback Plus");
    assert_eq!(last.bank_name, "Acme Bank");
    assert!(last.enabled);
    assert_eq!(last.created_at, "8/25/2026");
    assert_eq!(state.cards.len(), 5);
}

#[test]
fn test_create_flow_can_start_disabled() {
    let state = press(loaded_state(), KeyCode::Char('a'));
    let state = type_chars(state, "Secret Card");
    let state = press(state, KeyCode::Tab);
    let state = type_chars(state, "Vault");
    let state = press(state, KeyCode::Tab);
    // Space on the enabled field flips the draft
    let state = press(state, KeyCode::Char(' '));
    assert!(!state.draft.enabled);

    let draft = state.draft.clone();
    let state = apply_created(state, 50, draft, "8/25/2026".to_string());
    assert!(!state.cards.last().unwrap().enabled);
}

#[test]
fn test_create_failure_keeps_modal_and_draft() {
    let state = press(loaded_state(), KeyCode::Char('a'));
    let state = type_chars(state, "Doomed Card");
    let before = state.clone();

    // Submit runs, the request fails, no patch is applied
    let state = reduce_table_state(state, TableAction::SubmitForm, LIST_HEIGHT);
    assert_eq!(state, before);
    assert!(state.card_modal_open);
    assert_eq!(state.draft.name, "Doomed Card");
    assert_eq!(state.cards.len(), 4);
}

// ============================================================================
// Edit flow
// ============================================================================

#[test]
fn test_edit_flow_replaces_in_place() {
    let state = press(loaded_state(), KeyCode::Char('j'));
    let state = press(state, KeyCode::Char('e'));
    assert!(state.is_editing);
    assert_eq!(state.selected_card_id, Some(2));
    assert_eq!(state.draft.name, "Platinum Rewards");

    // Clear the name and retype it
    let state = (0..state.draft.name.len()).fold(state, |s, _| press(s, KeyCode::Backspace));
    let state = type_chars(state, "Platinum Select");

    let draft = state.draft.clone();
    let id = state.selected_card_id.unwrap();
    let state = apply_updated(state, id, draft);

    insta::assert_snapshot!(grid_lines(&state), @r"
      1 | Acme Bank | Visa Gold | 1/15/2024 | ● on
    > 2 | First National | Platinum Select | 1/15/2024 | ● on
      3 | Acme Bank | Gold Cash Back | 1/15/2024 | ○ off
      4 | Skyline Credit Union | Travel Elite | 1/15/2024 | ● on
    ");
}

#[test]
fn test_edit_through_filter_targets_filtered_row() {
    let state = press(loaded_state(), KeyCode::Char('/'));
    let state = type_chars(state, "skyline");
    let state = press(state, KeyCode::Enter);
    let state = press(state, KeyCode::Char('e'));

    // Row 0 of the filtered grid is card 4
    assert_eq!(state.selected_card_id, Some(4));
    assert_eq!(state.draft.bank_name, "Skyline Credit Union");
}

#[test]
fn test_edit_cancel_discards_changes() {
    let state = press(loaded_state(), KeyCode::Char('e'));
    let state = type_chars(state, "XXX");
    let state = press(state, KeyCode::Esc);

    assert!(!state.card_modal_open);
    assert_eq!(state.cards[0].name, "Visa Gold");
}

// ============================================================================
// Delete flow
// ============================================================================

#[test]
fn test_delete_flow_removes_row_preserving_order() {
    let state = press(loaded_state(), KeyCode::Char('j'));
    let state = press(state, KeyCode::Char('d'));
    assert!(state.delete_modal_open);
    assert_eq!(state.selected_card_id, Some(2));

    let id = state.selected_card_id.unwrap();
    let state = reduce_table_state(state, TableAction::ConfirmDelete, LIST_HEIGHT);
    // Still open until the service confirms
    assert!(state.delete_modal_open);

    let state = apply_deleted(state, id);
    assert!(!state.delete_modal_open);
    let ids: Vec<u64> = state.cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_delete_cancelled_with_n() {
    let state = press(loaded_state(), KeyCode::Char('d'));
    let state = press(state, KeyCode::Char('n'));
    assert!(!state.delete_modal_open);
    assert_eq!(state.cards.len(), 4);
}

#[test]
fn test_delete_failure_keeps_row_and_modal() {
    let state = press(loaded_state(), KeyCode::Char('d'));
    let before = state.clone();
    let state = reduce_table_state(state, TableAction::ConfirmDelete, LIST_HEIGHT);
    assert_eq!(state, before);
    assert!(state.delete_modal_open);
    assert_eq!(state.cards.len(), 4);
}

#[test]
fn test_delete_last_row_clamps_selection() {
    let state = press(loaded_state(), KeyCode::Char('G'));
    assert_eq!(state.selected_index, 3);
    let state = press(state, KeyCode::Char('d'));
    let state = apply_deleted(state, 4);
    assert_eq!(state.selected_index, 2);
}

// ============================================================================
// The enabled toggle is display-only
// ============================================================================

#[test]
fn test_toggle_enabled_never_changes_anything() {
    let state = loaded_state();
    let before = state.clone();

    let state = press(state, KeyCode::Char('t'));
    assert_eq!(state, before);

    // Even pressed repeatedly across different rows
    let state = press(state, KeyCode::Char('j'));
    let state = press(state, KeyCode::Char('t'));
    let state = press(state, KeyCode::Char('t'));
    assert_eq!(state.cards, before.cards);
}

// ============================================================================
// Mode routing
// ============================================================================

#[test]
fn test_modal_swallows_table_keys() {
    let state = press(loaded_state(), KeyCode::Char('a'));
    // 'q' would quit the table; inside the form it is text input
    let state = press(state, KeyCode::Char('q'));
    assert!(!state.should_exit);
    assert_eq!(state.draft.name, "q");

    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.mode, TableMode::Form);
}

#[test]
fn test_quit_from_table_mode() {
    let state = press(loaded_state(), KeyCode::Char('q'));
    assert!(state.should_exit);
}

#[test]
fn test_mode_reported_per_overlay() {
    let state = loaded_state();
    assert_eq!(compute_table_view_model(&state, LIST_HEIGHT).mode, TableMode::Table);

    let search = press(state.clone(), KeyCode::Char('/'));
    assert_eq!(
        compute_table_view_model(&search, LIST_HEIGHT).mode,
        TableMode::Search
    );

    let form = press(state.clone(), KeyCode::Char('a'));
    assert_eq!(compute_table_view_model(&form, LIST_HEIGHT).mode, TableMode::Form);

    let confirm = press(state, KeyCode::Char('d'));
    assert_eq!(
        compute_table_view_model(&confirm, LIST_HEIGHT).mode,
        TableMode::Confirm
    );
}

// ============================================================================
// Scrolling windows
// ============================================================================

#[test]
fn test_long_list_scrolls_selection_into_view() {
    let cards: Vec<CardRecord> = (1..=25)
        .map(|id| mock_card(id, &format!("Card {id}"), "Bank", true))
        .collect();
    let mut state = apply_loaded(TableState::default(), cards);

    for _ in 0..14 {
        state = press(state, KeyCode::Char('j'));
    }
    assert_eq!(state.selected_index, 14);

    let vm = compute_table_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.grid.rows.len(), LIST_HEIGHT);
    assert_eq!(vm.grid.rows[0].record.id, 6);
    assert!(vm.grid.rows.last().unwrap().is_selected);
}
