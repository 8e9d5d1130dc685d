use std::sync::Arc;

use iocraft::prelude::{ElementExt, element};

use crate::api::{CardService, HttpCardService};
use crate::config::Config;
use crate::error::Result;
use crate::tui::CardTable;

/// Launch the full-screen card table
pub async fn cmd_browse() -> Result<()> {
    let config = Config::load()?;
    let service: Arc<dyn CardService> = Arc::new(HttpCardService::from_config(&config)?);

    element!(CardTable(service: service)).fullscreen().await?;
    Ok(())
}
