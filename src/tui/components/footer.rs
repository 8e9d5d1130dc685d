//! Footer bar showing the keyboard shortcuts for the active mode.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut and its action label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            action: action.to_string(),
        }
    }
}

/// Shortcuts shown while navigating the table
pub fn table_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Move"),
        Shortcut::new("/", "Search"),
        Shortcut::new("a", "Add"),
        Shortcut::new("e", "Edit"),
        Shortcut::new("d", "Delete"),
        Shortcut::new("t", "Toggle"),
        Shortcut::new("r", "Reload"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts shown while the search bar has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Apply"),
        Shortcut::new("Esc", "Clear"),
        Shortcut::new("Ctrl+Q", "Quit"),
    ]
}

/// Shortcuts shown while the card form is open
pub fn form_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("Space", "Toggle Enabled"),
        Shortcut::new("Ctrl+S", "Save"),
        Shortcut::new("Esc", "Cancel"),
    ]
}

/// Shortcuts shown while the delete confirmation is open
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("y/Enter", "Delete"),
        Shortcut::new("n/Esc", "Cancel"),
    ]
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Single-row footer listing the shortcuts for the current mode
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            width: 100pct,
            background_color: theme().border,
            padding_left: 1,
            padding_right: 1,
            flex_wrap: FlexWrap::Wrap,
        ) {
            #(props.shortcuts.iter().map(|shortcut| element! {
                View(margin_right: 2) {
                    Text(
                        content: format!("[{}]", shortcut.key),
                        color: theme().highlight,
                        weight: Weight::Bold,
                    )
                    Text(content: format!(" {}", shortcut.action), color: theme().text)
                }
            }))
        }
    }
}
