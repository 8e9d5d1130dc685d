//! Terminal UI for browsing and editing the card catalog.

pub mod components;
pub mod navigation;
pub mod table;
pub mod theme;

pub use table::{CardTable, CardTableProps};
pub use theme::{Theme, theme};
