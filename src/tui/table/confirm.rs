//! Delete confirmation modal.

use iocraft::prelude::*;

use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct DeleteConfirmModalProps {
    pub card_id: u64,
    /// Card name for the prompt, when the card is still in the list
    pub card_name: Option<String>,
}

#[component]
pub fn DeleteConfirmModal(props: &DeleteConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let prompt = match &props.card_name {
        Some(name) => format!("Delete card {} ({})?", props.card_id, name),
        None => format!("Delete card {}?", props.card_id),
    };

    element! {
        ModalOverlay {
            ModalContainer(
                title: "Delete Card".to_string(),
                border_color: ModalBorderColor::Error,
                width: 50,
                show_close_hint: false,
            ) {
                Text(content: prompt, color: theme().text)
                View(margin_top: 1) {
                    Text(content: "y/Enter", color: Color::Red, weight: Weight::Bold)
                    Text(content: " delete    ", color: theme().text_dimmed)
                    Text(content: "n/Esc", color: theme().text, weight: Weight::Bold)
                    Text(content: " cancel", color: theme().text_dimmed)
                }
            }
        }
    }
}
