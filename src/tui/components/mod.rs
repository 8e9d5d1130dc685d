//! Shared TUI components

pub mod footer;
pub mod modal_container;
pub mod modal_overlay;
pub mod search_box;

pub use footer::{Footer, FooterProps, Shortcut};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use search_box::{InlineSearchBox, InlineSearchBoxProps};
