use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cardctl::api::HttpCardService;
use cardctl::commands::{
    CreateOptions, UpdateOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show,
    cmd_create, cmd_delete, cmd_ls, cmd_update,
};
use cardctl::config::Config;
use cardctl::error::Result;

#[derive(Parser)]
#[command(name = "cardctl")]
#[command(about = "Admin client for a card catalog service")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse cards in a full-screen table
    #[command(visible_alias = "b")]
    Browse,

    /// List cards
    Ls {
        /// Only show cards whose name or bank matches
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a card
    Create {
        /// Card product name
        name: String,

        /// Issuing bank
        #[arg(short, long)]
        bank: String,

        /// Create the card disabled (default: enabled)
        #[arg(long)]
        disabled: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a card
    Update {
        /// Card id
        id: u64,

        /// New card name
        #[arg(short, long)]
        name: Option<String>,

        /// New issuing bank
        #[arg(short, long)]
        bank: Option<String>,

        /// Enable the card
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Disable the card
        #[arg(long)]
        disable: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a card
    Delete {
        /// Card id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single value
    Get {
        /// Config key (api_url)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Config key (api_url)
        key: String,

        /// New value
        value: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CARDCTL_LOG")
                .unwrap_or_else(|_| "cardctl=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn service() -> Result<HttpCardService> {
    let config = Config::load()?;
    HttpCardService::from_config(&config)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Browse => cmd_browse().await,
        Commands::Ls { search, json } => cmd_ls(&service()?, search.as_deref(), json).await,
        Commands::Create {
            name,
            bank,
            disabled,
            json,
        } => {
            cmd_create(
                &service()?,
                CreateOptions {
                    name,
                    bank,
                    disabled,
                },
                json,
            )
            .await
        }
        Commands::Update {
            id,
            name,
            bank,
            enable,
            disable,
            json,
        } => {
            let enabled = if enable {
                Some(true)
            } else if disable {
                Some(false)
            } else {
                None
            };
            cmd_update(&service()?, id, UpdateOptions { name, bank, enabled }, json).await
        }
        Commands::Delete { id, force, json } => cmd_delete(&service()?, id, force, json).await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
