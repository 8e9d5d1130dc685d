pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod tui;
pub mod types;

pub use api::{CardPayload, CardService, HttpCardService};
pub use config::Config;
pub use error::{CardError, Result};
pub use filter::filter_cards;
pub use types::{CardDraft, CardRecord, format_display_date, today_display_date};
