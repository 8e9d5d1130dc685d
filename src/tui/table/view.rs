//! The card table component for `cardctl browse`.
//!
//! The component owns a single [`TableState`], feeds key presses through
//! [`key_to_action`] and [`reduce_table_state`], and renders the
//! projection from [`compute_table_view_model`]. Service calls run in
//! async handlers and land back in the state as completion patches.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::{CardPayload, CardService};
use crate::tui::components::footer::{
    confirm_shortcuts, form_shortcuts, search_shortcuts, table_shortcuts,
};
use crate::tui::components::{Footer, InlineSearchBox};
use crate::tui::theme::theme;
use crate::types::{CardDraft, today_display_date};

use super::confirm::DeleteConfirmModal;
use super::form::CardFormModal;
use super::model::{
    TableAction, TableMode, TableState, apply_created, apply_deleted, apply_load_failed,
    apply_loaded, apply_updated, compute_table_view_model, key_to_action, reduce_table_state,
};

// Header, search bar, column labels, footer and borders
const CHROME_ROWS: u16 = 6;

#[derive(Default, Props)]
pub struct CardTableProps {
    /// Service the table reads and writes through
    pub service: Option<Arc<dyn CardService>>,
}

#[component]
pub fn CardTable(props: &CardTableProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (_width, height) = hooks.use_terminal_size();
    let list_height = height.saturating_sub(CHROME_ROWS).max(1) as usize;

    let state = hooks.use_state(TableState::default);

    let reload_handler = hooks.use_async_handler({
        let service = props.service.clone();
        move |_: ()| {
            let mut state = state;
            let service = service.clone();
            async move {
                let Some(service) = service else {
                    tracing::warn!("card table mounted without a service");
                    let next = apply_load_failed(state.read().clone());
                    state.set(next);
                    return;
                };
                match service.fetch_cards().await {
                    Ok(cards) => {
                        let next = apply_loaded(state.read().clone(), cards);
                        state.set(next);
                    }
                    Err(e) => {
                        tracing::error!("failed to fetch cards: {e}");
                        let next = apply_load_failed(state.read().clone());
                        state.set(next);
                    }
                }
            }
        }
    });

    let submit_handler = hooks.use_async_handler({
        let service = props.service.clone();
        move |(is_editing, remembered_id, draft): (bool, Option<u64>, CardDraft)| {
            let mut state = state;
            let service = service.clone();
            async move {
                let Some(service) = service else { return };
                let payload = CardPayload::from(&draft);
                if is_editing {
                    let Some(id) = remembered_id else { return };
                    match service.update_card(id, &payload).await {
                        Ok(()) => {
                            let next = apply_updated(state.read().clone(), id, draft);
                            state.set(next);
                        }
                        Err(e) => {
                            // The modal stays open so nothing typed is lost
                            tracing::error!("failed to update card {id}: {e}");
                        }
                    }
                } else {
                    match service.add_card(&payload).await {
                        Ok(id) => {
                            let next =
                                apply_created(state.read().clone(), id, draft, today_display_date());
                            state.set(next);
                        }
                        Err(e) => {
                            tracing::error!("failed to create card: {e}");
                        }
                    }
                }
            }
        }
    });

    let delete_handler = hooks.use_async_handler({
        let service = props.service.clone();
        move |card_id: u64| {
            let mut state = state;
            let service = service.clone();
            async move {
                let Some(service) = service else { return };
                match service.delete_card(card_id).await {
                    Ok(()) => {
                        let next = apply_deleted(state.read().clone(), card_id);
                        state.set(next);
                    }
                    Err(e) => {
                        // The confirmation stays open; the row is only
                        // removed once the service accepted the delete
                        tracing::error!("failed to delete card {card_id}: {e}");
                    }
                }
            }
        }
    });

    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        reload_handler.clone()(());
    }

    hooks.use_terminal_events({
        let reload = reload_handler.clone();
        let submit = submit_handler.clone();
        let delete = delete_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut state = state;
                let action = {
                    let current = state.read();
                    key_to_action(code, modifiers, &current)
                };
                let Some(action) = action else { return };

                match &action {
                    TableAction::Reload => reload.clone()(()),
                    TableAction::SubmitForm => {
                        let (is_editing, remembered_id, draft) = {
                            let current = state.read();
                            (
                                current.is_editing,
                                current.selected_card_id,
                                current.draft.clone(),
                            )
                        };
                        submit.clone()((is_editing, remembered_id, draft));
                    }
                    TableAction::ConfirmDelete => {
                        let target = state.read().selected_card_id;
                        if let Some(card_id) = target {
                            delete.clone()(card_id);
                        }
                    }
                    _ => {}
                }

                let next = reduce_table_state(state.read().clone(), action, list_height);
                state.set(next);
            }
            _ => {}
        }
    });

    let vm = compute_table_view_model(&state.read(), list_height);

    let status = if vm.is_loading {
        "Loading...".to_string()
    } else {
        vm.header.count_label()
    };
    let shortcuts = match vm.mode {
        TableMode::Table => table_shortcuts(),
        TableMode::Search => search_shortcuts(),
        TableMode::Form => form_shortcuts(),
        TableMode::Confirm => confirm_shortcuts(),
    };

    let mut system = hooks.use_context_mut::<SystemContext>();
    if state.read().should_exit {
        system.exit();
    }

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: theme().background,
        ) {
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                justify_content: JustifyContent::SpaceBetween,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: theme().border,
            ) {
                Text(content: "CARD CATALOG", weight: Weight::Bold, color: theme().highlight)
                Text(content: status, color: theme().text_dimmed)
            }

            InlineSearchBox(value: vm.search.query.clone(), has_focus: vm.search.is_focused)

            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: theme().border,
            ) {
                View(width: 6) {
                    Text(content: "ID", weight: Weight::Bold, color: theme().text_dimmed)
                }
                View(width: 22) {
                    Text(content: "BANK", weight: Weight::Bold, color: theme().text_dimmed)
                }
                View(flex_grow: 1.0) {
                    Text(content: "NAME", weight: Weight::Bold, color: theme().text_dimmed)
                }
                View(width: 12) {
                    Text(content: "CREATED", weight: Weight::Bold, color: theme().text_dimmed)
                }
                View(width: 9) {
                    Text(content: "ENABLED", weight: Weight::Bold, color: theme().text_dimmed)
                }
            }

            View(flex_direction: FlexDirection::Column, flex_grow: 1.0, overflow: Overflow::Hidden) {
                #(vm.empty_message.as_ref().map(|message| element! {
                    View(padding: 1) {
                        Text(content: message.clone(), color: theme().text_dimmed)
                    }
                }))
                #(vm.grid.rows.iter().map(|row| {
                    let background = row.is_selected.then(|| theme().highlight);
                    element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                            background_color: background,
                        ) {
                            View(width: 6) {
                                Text(content: row.record.id.to_string(), color: theme().id_color)
                            }
                            View(width: 22, overflow: Overflow::Hidden) {
                                Text(content: row.record.bank_name.clone(), color: theme().text)
                            }
                            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                                Text(content: row.record.name.clone(), color: theme().text)
                            }
                            View(width: 12) {
                                Text(content: row.record.created_at.clone(), color: theme().text_dimmed)
                            }
                            View(width: 9) {
                                Text(
                                    content: row.enabled_label().to_string(),
                                    color: theme().enabled_color(row.record.enabled),
                                )
                            }
                        }
                    }
                }))
            }

            Footer(shortcuts: shortcuts)

            #(vm.card_modal.as_ref().map(|modal| element! {
                CardFormModal(
                    title: modal.title.to_string(),
                    draft: modal.draft.clone(),
                    focus: modal.focus,
                )
            }))
            #(vm.delete_modal.as_ref().map(|modal| element! {
                DeleteConfirmModal(card_id: modal.card_id, card_name: modal.card_name.clone())
            }))
        }
    }
}
