//! Interactive card table.

pub mod confirm;
pub mod form;
pub mod model;
pub mod view;

pub use view::{CardTable, CardTableProps};
