//! Create/edit form modal.

use iocraft::prelude::*;

use crate::tui::components::{ModalContainer, ModalOverlay};
use crate::tui::theme::theme;
use crate::types::CardDraft;

use super::model::FormField;

#[derive(Default, Props)]
pub struct CardFormModalProps {
    /// "Add Card" or "Edit Card"
    pub title: String,
    /// Working copy being edited
    pub draft: CardDraft,
    /// Field receiving keystrokes
    pub focus: FormField,
}

/// The card form: two text fields and the enabled switch. All editing goes
/// through the reducer; this component only displays the draft.
#[component]
pub fn CardFormModal(props: &CardFormModalProps) -> impl Into<AnyElement<'static>> {
    let draft = props.draft.clone();
    let focus = props.focus;

    element! {
        ModalOverlay {
            ModalContainer(
                title: props.title.clone(),
                width: 60,
                footer_text: "Enter or Ctrl+S saves".to_string(),
            ) {
                #(text_field("Name", &draft.name, focus == FormField::Name))
                #(text_field("Bank", &draft.bank_name, focus == FormField::Bank))
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(
                        content: "Enabled",
                        color: label_color(focus == FormField::Enabled),
                        weight: Weight::Bold,
                    )
                    View(padding_left: 1) {
                        Text(
                            content: switch_label(draft.enabled),
                            color: theme().enabled_color(draft.enabled),
                        )
                        #((focus == FormField::Enabled).then(|| element! {
                            Text(content: "  Space toggles", color: theme().text_dimmed)
                        }))
                    }
                }
            }
        }
    }
}

fn text_field(label: &str, value: &str, focused: bool) -> AnyElement<'static> {
    let content = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let border_color = if focused {
        theme().border_focused
    } else {
        theme().border
    };

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: label.to_string(), color: label_color(focused), weight: Weight::Bold)
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: content, color: theme().text)
            }
        }
    }
    .into_any()
}

fn label_color(focused: bool) -> Color {
    if focused {
        theme().border_focused
    } else {
        theme().text_dimmed
    }
}

fn switch_label(enabled: bool) -> String {
    if enabled {
        "[x] on".to_string()
    } else {
        "[ ] off".to_string()
    }
}
