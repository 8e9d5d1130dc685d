//! Bordered dialog box used by the form and delete modals.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Border color variants for modal dialogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalBorderColor {
    /// Standard focused border
    #[default]
    Focused,
    /// Destructive action border
    Error,
}

impl ModalBorderColor {
    pub fn to_color(self) -> Color {
        match self {
            ModalBorderColor::Focused => theme().border_focused,
            ModalBorderColor::Error => Color::Red,
        }
    }
}

#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Title shown in the modal header
    pub title: String,
    /// Border color variant. Defaults to the focused border.
    pub border_color: Option<ModalBorderColor>,
    /// Dialog width in columns. Defaults to 60.
    pub width: Option<u32>,
    /// Show the "Esc to close" hint next to the title. Defaults to true.
    pub show_close_hint: Option<bool>,
    /// Optional hint line under the content
    pub footer_text: Option<String>,
    /// The modal body
    pub children: Vec<AnyElement<'a>>,
}

/// Double-bordered dialog with a titled header, a body, and an optional
/// footer hint line.
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let border_color = props.border_color.unwrap_or_default().to_color();
    let width = props.width.unwrap_or(60);
    let show_close_hint = props.show_close_hint.unwrap_or(true);

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Double,
            border_color: border_color,
            background_color: theme().background,
            width: Size::Length(width),
        ) {
            View(
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: theme().border,
            ) {
                Text(content: props.title.clone(), weight: Weight::Bold, color: theme().text)
                #(show_close_hint.then(|| element! {
                    Text(content: "Esc to close", color: theme().text_dimmed)
                }))
            }

            View(
                flex_direction: FlexDirection::Column,
                padding: 1,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(props.footer_text.clone().map(|text| element! {
                View(
                    padding_left: 1,
                    padding_right: 1,
                    border_style: BorderStyle::Single,
                    border_edges: Edges::Top,
                    border_color: theme().border,
                ) {
                    Text(content: text, color: theme().text_dimmed)
                }
            }))
        }
    }
}
