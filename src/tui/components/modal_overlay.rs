//! Full-screen overlay that dims the table and centers a modal.

use iocraft::prelude::*;

/// Backdrop color behind modal dialogs
const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Dim the content behind the modal. Defaults to true.
    pub show_backdrop: Option<bool>,
    /// The modal content to center
    pub children: Vec<AnyElement<'a>>,
}

/// Covers the whole screen and centers its children, optionally dimming
/// whatever is underneath.
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(true);
    let backdrop = if show_backdrop {
        Some(MODAL_BACKDROP)
    } else {
        None
    };

    element! {
        View(
            position: Position::Absolute,
            width: 100pct,
            height: 100pct,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: backdrop,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
