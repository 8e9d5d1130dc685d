//! State, actions and view projection for the card table.
//!
//! All mutable state lives in [`TableState`], and every mutation goes
//! through [`reduce_table_state`] or one of the completion patches. The
//! component renders from [`compute_table_view_model`] and never touches
//! the state directly, so the whole interaction model is testable without
//! a terminal.
//!
//! Service calls are not performed here. The reducer treats
//! [`TableAction::SubmitForm`] and [`TableAction::ConfirmDelete`] as
//! no-ops; the component runs the request and applies a completion patch
//! when it succeeds. A failed call applies no patch at all, so the list
//! keeps its contents and the modal stays open.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::filter::filter_cards;
use crate::tui::navigation;
use crate::types::{CardDraft, CardRecord};

/// Which field of the card form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Bank,
    Enabled,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Bank,
            FormField::Bank => FormField::Enabled,
            FormField::Enabled => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Enabled,
            FormField::Bank => FormField::Name,
            FormField::Enabled => FormField::Bank,
        }
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    // Data
    pub cards: Vec<CardRecord>,
    pub is_loading: bool,

    // Search
    pub search_query: String,
    pub search_focused: bool,

    // Navigation (indices into the filtered list)
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Card form modal
    pub card_modal_open: bool,
    pub is_editing: bool,
    pub draft: CardDraft,
    pub form_focus: FormField,

    // Delete confirmation modal
    pub delete_modal_open: bool,

    /// Id captured when the edit or delete modal opened
    pub selected_card_id: Option<u64>,

    // App
    pub should_exit: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            // The initial fetch starts as soon as the table mounts
            is_loading: true,
            search_query: String::new(),
            search_focused: false,
            selected_index: 0,
            scroll_offset: 0,
            card_modal_open: false,
            is_editing: false,
            draft: CardDraft::default(),
            form_focus: FormField::Name,
            delete_modal_open: false,
            selected_card_id: None,
            should_exit: false,
        }
    }
}

/// All possible actions on the card table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    // Navigation
    /// Move the selection up one row
    MoveUp,
    /// Move the selection down one row
    MoveDown,
    /// Jump to the first row
    GoToTop,
    /// Jump to the last row
    GoToBottom,
    /// Move a full page up
    PageUp,
    /// Move a full page down
    PageDown,

    // Search
    /// Give the search bar keyboard focus
    FocusSearch,
    /// Append a character to the query
    SearchInput(char),
    /// Delete the last character of the query
    SearchBackspace,
    /// Leave search mode, keeping the query applied
    ExitSearch,
    /// Clear the query and leave search mode
    ClearSearchAndExit,

    /// Flip nothing. The enabled switch is display-only and the service is
    /// never asked to change it.
    ToggleEnabled,

    // Modals
    /// Open the form with a blank draft for a new card
    OpenCreateModal,
    /// Open the form prefilled from the selected card
    OpenEditModal,
    /// Open the delete confirmation for the selected card
    OpenDeleteModal,
    /// Close the form without saving
    CloseCardModal,
    /// Close the delete confirmation without deleting
    CloseDeleteModal,

    // Form editing
    /// Focus the next form field
    FormNextField,
    /// Focus the previous form field
    FormPrevField,
    /// Append a character to the focused text field
    FormInput(char),
    /// Delete the last character of the focused text field
    FormBackspace,
    /// Flip the draft's enabled flag
    FormToggleEnabled,

    // Service operations (async, run by the component)
    /// Refetch the card list
    Reload,
    /// Create or update from the current draft
    SubmitForm,
    /// Delete the card the confirmation was opened for
    ConfirmDelete,

    /// Leave the table
    Quit,
}

/// Apply an action to the state, returning the new state.
///
/// `list_height` is the number of card rows the terminal can show, used
/// for scroll math.
pub fn reduce_table_state(
    mut state: TableState,
    action: TableAction,
    list_height: usize,
) -> TableState {
    let filtered = filter_cards(&state.cards, &state.search_query);
    let row_count = filtered.len();

    match action {
        TableAction::MoveUp => {
            navigation::scroll_up(&mut state.selected_index, &mut state.scroll_offset);
        }
        TableAction::MoveDown => {
            navigation::scroll_down(
                &mut state.selected_index,
                &mut state.scroll_offset,
                row_count,
                list_height,
            );
        }
        TableAction::GoToTop => {
            navigation::scroll_to_top(&mut state.selected_index, &mut state.scroll_offset);
        }
        TableAction::GoToBottom => {
            navigation::scroll_to_bottom(
                &mut state.selected_index,
                &mut state.scroll_offset,
                row_count,
                list_height,
            );
        }
        TableAction::PageUp => {
            navigation::page_up(&mut state.selected_index, &mut state.scroll_offset, list_height);
        }
        TableAction::PageDown => {
            navigation::page_down(
                &mut state.selected_index,
                &mut state.scroll_offset,
                row_count,
                list_height,
            );
        }

        TableAction::FocusSearch => {
            state.search_focused = true;
        }
        TableAction::SearchInput(c) => {
            state.search_query.push(c);
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        TableAction::SearchBackspace => {
            state.search_query.pop();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        TableAction::ExitSearch => {
            state.search_focused = false;
        }
        TableAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.search_focused = false;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        TableAction::ToggleEnabled => {}

        TableAction::OpenCreateModal => {
            state.card_modal_open = true;
            state.is_editing = false;
            state.draft = CardDraft::new_card();
            state.form_focus = FormField::Name;
            state.selected_card_id = None;
        }
        TableAction::OpenEditModal => {
            if let Some(card) = filtered.get(state.selected_index) {
                state.card_modal_open = true;
                state.is_editing = true;
                state.draft = CardDraft::from_record(card);
                state.form_focus = FormField::Name;
                state.selected_card_id = Some(card.id);
            }
        }
        TableAction::OpenDeleteModal => {
            if let Some(card) = filtered.get(state.selected_index) {
                state.delete_modal_open = true;
                state.selected_card_id = Some(card.id);
            }
        }
        TableAction::CloseCardModal => {
            state.card_modal_open = false;
            state.is_editing = false;
            state.draft = CardDraft::default();
            state.selected_card_id = None;
        }
        TableAction::CloseDeleteModal => {
            state.delete_modal_open = false;
            state.selected_card_id = None;
        }

        TableAction::FormNextField => {
            state.form_focus = state.form_focus.next();
        }
        TableAction::FormPrevField => {
            state.form_focus = state.form_focus.prev();
        }
        TableAction::FormInput(c) => match state.form_focus {
            FormField::Name => state.draft.name.push(c),
            FormField::Bank => state.draft.bank_name.push(c),
            FormField::Enabled => {}
        },
        TableAction::FormBackspace => match state.form_focus {
            FormField::Name => {
                state.draft.name.pop();
            }
            FormField::Bank => {
                state.draft.bank_name.pop();
            }
            FormField::Enabled => {}
        },
        TableAction::FormToggleEnabled => {
            state.draft.enabled = !state.draft.enabled;
        }

        TableAction::Reload => {
            state.is_loading = true;
        }
        // Run by the component; the list and modals only change once a
        // completion patch lands.
        TableAction::SubmitForm | TableAction::ConfirmDelete => {}

        TableAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Replace the working list after a fetch completed.
pub fn apply_loaded(mut state: TableState, cards: Vec<CardRecord>) -> TableState {
    state.cards = cards;
    state.is_loading = false;
    state.selected_index = 0;
    state.scroll_offset = 0;
    state
}

/// Stop the loading indicator after a failed fetch. The list is left as it
/// was.
pub fn apply_load_failed(mut state: TableState) -> TableState {
    state.is_loading = false;
    state
}

/// Append the created card once the service assigned it an id.
///
/// `created_at` is the display date for the new row; the service's own
/// timestamp is only seen on the next full fetch.
pub fn apply_created(
    mut state: TableState,
    id: u64,
    draft: CardDraft,
    created_at: String,
) -> TableState {
    let mut record = draft.into_record(id);
    record.created_at = created_at;
    state.cards.push(record);
    close_card_modal(&mut state);
    state
}

/// Swap the edited draft back into place once the service accepted it.
///
/// The card keeps its position in the list. If the id vanished from the
/// list in the meantime, only the modal closes.
pub fn apply_updated(mut state: TableState, id: u64, draft: CardDraft) -> TableState {
    if let Some(slot) = state.cards.iter_mut().find(|card| card.id == id) {
        *slot = draft.into_record(id);
    }
    close_card_modal(&mut state);
    state
}

/// Drop the deleted card, preserving the order of the rest.
pub fn apply_deleted(mut state: TableState, id: u64) -> TableState {
    state.cards.retain(|card| card.id != id);
    state.delete_modal_open = false;
    state.selected_card_id = None;
    let row_count = filter_cards(&state.cards, &state.search_query).len();
    navigation::clamp_to_len(&mut state.selected_index, &mut state.scroll_offset, row_count);
    state
}

fn close_card_modal(state: &mut TableState) {
    state.card_modal_open = false;
    state.is_editing = false;
    state.draft = CardDraft::default();
    state.selected_card_id = None;
}

/// Which input mode the table is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Table,
    Search,
    Form,
    Confirm,
}

/// A visible card row
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    pub record: CardRecord,
    pub is_selected: bool,
}

impl RowViewModel {
    pub fn enabled_label(&self) -> &'static str {
        if self.record.enabled { "● on" } else { "○ off" }
    }
}

/// Card count summary for the header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub total: usize,
    pub matching: usize,
}

impl HeaderViewModel {
    pub fn count_label(&self) -> String {
        if self.matching == self.total {
            format!("{} cards", self.total)
        } else {
            format!("{} of {} cards", self.matching, self.total)
        }
    }
}

/// The scroll window over the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewModel {
    /// Rows inside the current scroll window
    pub rows: Vec<RowViewModel>,
    /// Filtered row count, including rows outside the window
    pub row_count: usize,
    pub scroll_offset: usize,
    pub selected_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    pub query: String,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModalViewModel {
    pub title: &'static str,
    pub draft: CardDraft,
    pub focus: FormField,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteModalViewModel {
    pub card_id: u64,
    /// Name of the card being deleted, when it is still in the list
    pub card_name: Option<String>,
}

/// Everything the component needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub mode: TableMode,
    pub header: HeaderViewModel,
    pub grid: GridViewModel,
    pub search: SearchViewModel,
    pub card_modal: Option<CardModalViewModel>,
    pub delete_modal: Option<DeleteModalViewModel>,
    /// Message shown in place of the grid when it has no rows
    pub empty_message: Option<String>,
    pub is_loading: bool,
}

/// Project the state into a view model for one frame.
///
/// Out-of-range indices are clamped here for display. The state itself is
/// untouched; persistent clamping happens in the reducer and patches.
pub fn compute_table_view_model(state: &TableState, list_height: usize) -> TableViewModel {
    let filtered = filter_cards(&state.cards, &state.search_query);
    let row_count = filtered.len();

    let selected_index = if row_count == 0 {
        0
    } else {
        state.selected_index.min(row_count - 1)
    };
    let max_offset = row_count.saturating_sub(list_height.max(1));
    let scroll_offset = state.scroll_offset.min(max_offset).min(selected_index);

    let rows: Vec<RowViewModel> = filtered
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(list_height.max(1))
        .map(|(index, record)| RowViewModel {
            record: record.clone(),
            is_selected: index == selected_index,
        })
        .collect();

    let mode = if state.card_modal_open {
        TableMode::Form
    } else if state.delete_modal_open {
        TableMode::Confirm
    } else if state.search_focused {
        TableMode::Search
    } else {
        TableMode::Table
    };

    let card_modal = state.card_modal_open.then(|| CardModalViewModel {
        title: if state.is_editing { "Edit Card" } else { "Add Card" },
        draft: state.draft.clone(),
        focus: state.form_focus,
    });

    let delete_modal = if state.delete_modal_open {
        state.selected_card_id.map(|card_id| DeleteModalViewModel {
            card_id,
            card_name: state
                .cards
                .iter()
                .find(|card| card.id == card_id)
                .map(|card| card.name.clone()),
        })
    } else {
        None
    };

    let empty_message = if state.is_loading || row_count > 0 {
        None
    } else if state.search_query.is_empty() {
        Some("No cards yet. Press 'a' to add one.".to_string())
    } else {
        Some(format!("No cards match '{}'", state.search_query))
    };

    TableViewModel {
        mode,
        header: HeaderViewModel {
            total: state.cards.len(),
            matching: row_count,
        },
        grid: GridViewModel {
            rows,
            row_count,
            scroll_offset,
            selected_index,
        },
        search: SearchViewModel {
            query: state.search_query.clone(),
            is_focused: state.search_focused,
        },
        card_modal,
        delete_modal,
        empty_message,
        is_loading: state.is_loading,
    }
}

/// Map a key press to an action, if any.
///
/// Open modals capture all input, then the search bar, then the table.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &TableState,
) -> Option<TableAction> {
    if state.card_modal_open {
        return form_key_to_action(code, modifiers, state.form_focus);
    }

    if state.delete_modal_open {
        return match code {
            KeyCode::Esc | KeyCode::Char('n') => Some(TableAction::CloseDeleteModal),
            KeyCode::Enter | KeyCode::Char('y') => Some(TableAction::ConfirmDelete),
            _ => None,
        };
    }

    if state.search_focused {
        return search_key_to_action(code, modifiers);
    }

    table_key_to_action(code, modifiers)
}

fn form_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    focus: FormField,
) -> Option<TableAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(TableAction::SubmitForm),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(TableAction::CloseCardModal),
        KeyCode::Enter => Some(TableAction::SubmitForm),
        KeyCode::Tab => Some(TableAction::FormNextField),
        KeyCode::BackTab => Some(TableAction::FormPrevField),
        KeyCode::Up => Some(TableAction::FormPrevField),
        KeyCode::Down => Some(TableAction::FormNextField),
        KeyCode::Char(' ') if focus == FormField::Enabled => Some(TableAction::FormToggleEnabled),
        KeyCode::Char(c) => Some(TableAction::FormInput(c)),
        KeyCode::Backspace => Some(TableAction::FormBackspace),
        _ => None,
    }
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<TableAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(TableAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(TableAction::ClearSearchAndExit),
        KeyCode::Enter | KeyCode::Tab => Some(TableAction::ExitSearch),
        KeyCode::Backspace => Some(TableAction::SearchBackspace),
        KeyCode::Char(c) => Some(TableAction::SearchInput(c)),
        _ => None,
    }
}

fn table_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<TableAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(TableAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(TableAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(TableAction::MoveUp),
        KeyCode::Char('g') => Some(TableAction::GoToTop),
        KeyCode::Char('G') => Some(TableAction::GoToBottom),
        KeyCode::PageUp => Some(TableAction::PageUp),
        KeyCode::PageDown => Some(TableAction::PageDown),
        KeyCode::Char('/') => Some(TableAction::FocusSearch),
        KeyCode::Char('a') => Some(TableAction::OpenCreateModal),
        KeyCode::Char('e') | KeyCode::Enter => Some(TableAction::OpenEditModal),
        KeyCode::Char('d') => Some(TableAction::OpenDeleteModal),
        KeyCode::Char('t') => Some(TableAction::ToggleEnabled),
        KeyCode::Char('r') => Some(TableAction::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(TableAction::Quit),
        _ => None,
    }
}
