//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::{CardError, Result};

const VALID_KEYS: &[&str] = &["api_url"];

fn validate_config_key(key: &str) -> Result<()> {
    if VALID_KEYS.contains(&key) {
        return Ok(());
    }
    Err(CardError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    )))
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "api_url": config.api_url,
                "effective_api_url": config.api_url(),
                "config_file": Config::config_path().to_string_lossy(),
            }))?
        );
        return Ok(());
    }

    println!("{}", "Configuration:".cyan().bold());
    match &config.api_url {
        Some(url) => println!("  {}: {}", "api_url".cyan(), url),
        None => println!("  {}: {}", "api_url".cyan(), "not set".dimmed()),
    }
    println!("  {}: {}", "effective".cyan(), config.api_url());
    println!(
        "  {}: {}",
        "config_file".cyan(),
        Config::config_path().display()
    );
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    validate_config_key(key)?;
    let config = Config::load()?;
    match key {
        "api_url" => println!("{}", config.api_url()),
        _ => {}
    }
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    let mut config = Config::load()?;
    match key {
        "api_url" => config.set_api_url(value)?,
        _ => {}
    }
    config.save()?;
    println!("Set {} = {}", key.cyan(), value);
    Ok(())
}
