//! Inline search bar rendered above the card grid.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct InlineSearchBoxProps {
    /// Current query text
    pub value: String,
    /// Whether keystrokes are routed to the search bar
    pub has_focus: bool,
}

/// One-line search input.
///
/// The component only displays the query; editing happens in the key
/// handling of the table, so the query lives in the same state as
/// everything else.
#[component]
pub fn InlineSearchBox(props: &InlineSearchBoxProps) -> impl Into<AnyElement<'static>> {
    let prefix_color = if props.has_focus {
        theme().border_focused
    } else {
        theme().text_dimmed
    };
    let content = if props.has_focus {
        format!("{}_", props.value)
    } else if props.value.is_empty() {
        "press / to search".to_string()
    } else {
        props.value.clone()
    };
    let content_color = if props.has_focus || !props.value.is_empty() {
        theme().text
    } else {
        theme().text_dimmed
    };

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "/ ", color: prefix_color, weight: Weight::Bold)
            Text(content: content, color: content_color)
        }
    }
}
