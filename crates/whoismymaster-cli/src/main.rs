//! WhoIsMyMaster CLI - Owner list management and identity preview
//!
//! Local harness for the plugin: edits the master list, shows what the bot
//! would say or inject for a given sender, and runs the Discord host.

mod config;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use whoismymaster::{
    InboundMessage, MessageType, ProviderRequest, Sender, Star, WhoIsMyMaster, WHOAMI_COMMAND,
};
use whoismymaster_integration_discord::DiscordConfig;

use config::Config;

#[derive(Parser)]
#[command(name = "whoismymaster")]
#[command(about = "WhoIsMyMaster CLI - Bot owner recognition", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the master ID list
    Master {
        #[command(subcommand)]
        action: MasterAction,
    },

    /// Show the `whoami` reply for a sender
    Whoami {
        /// Sender ID
        #[arg(long)]
        id: String,
        /// Sender display name
        #[arg(long)]
        name: String,
    },

    /// Show the system prompt after identity injection
    Prompt {
        /// Sender ID
        #[arg(long)]
        id: String,
        /// Sender display name
        #[arg(long)]
        name: String,
        /// Existing system prompt to append to
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Check whether an ID is a master
    Check {
        /// Sender ID
        id: String,
    },

    /// Run the plugin on Discord
    Discord {
        /// Bot token (overrides config)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum MasterAction {
    /// Add a master ID
    Add {
        /// Platform user ID
        id: String,
    },
    /// Remove a master ID
    Remove {
        /// Platform user ID
        id: String,
    },
    /// List master IDs
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Master { action } => cmd_master(action),
        Commands::Whoami { id, name } => cmd_whoami(id, name).await,
        Commands::Prompt { id, name, system } => cmd_prompt(id, name, system).await,
        Commands::Check { id } => cmd_check(id).await,
        Commands::Discord { token } => cmd_discord(token).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

/// Load config and bring up the plugin the way a host would
async fn load_plugin() -> Result<WhoIsMyMaster> {
    let config = Config::load()?;
    tracing::debug!(masters = config.master_id.len(), "Loaded CLI config");
    let plugin = WhoIsMyMaster::new(config.plugin_config());
    plugin.initialize().await;
    Ok(plugin)
}

fn cli_message(id: String, name: String, text: &str) -> InboundMessage {
    InboundMessage::new(Sender::new(id, name), text, "cli").with_message_type(MessageType::Private)
}

fn cmd_master(action: MasterAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        MasterAction::Add { id } => {
            if config.add_master(id.clone()) {
                config.save()?;
                println!("{} Master '{}' added", "✓".green(), id);
            } else {
                println!("{} Master '{}' already configured", "✓".yellow(), id);
            }
        }

        MasterAction::Remove { id } => {
            if config.remove_master(&id) {
                config.save()?;
                println!("{} Master '{}' removed", "✓".green(), id);
            } else {
                bail!("Master '{}' not found", id);
            }
        }

        MasterAction::List => {
            if config.master_id.is_empty() {
                println!("No masters configured.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  whoismymaster master add <ID>");
                return Ok(());
            }

            println!("{}", "Masters:".bold());
            for id in &config.master_id {
                println!("  {} {}", "👑".dimmed(), id.cyan());
            }
        }
    }

    Ok(())
}

async fn cmd_whoami(id: String, name: String) -> Result<()> {
    let plugin = load_plugin().await?;
    let event = cli_message(id, name, WHOAMI_COMMAND);

    for reply in plugin.handle_command(WHOAMI_COMMAND, &event).await {
        println!("{}", reply.text);
    }

    Ok(())
}

async fn cmd_prompt(id: String, name: String, system: Option<String>) -> Result<()> {
    let plugin = load_plugin().await?;
    let event = cli_message(id, name, "");
    let mut request = ProviderRequest::new("").with_system_prompt(system.unwrap_or_default());

    plugin.on_llm_request(&event, &mut request).await;

    // Output the prompt to stdout (clean for piping)
    println!("{}", request.system_prompt);

    Ok(())
}

async fn cmd_check(id: String) -> Result<()> {
    let plugin = load_plugin().await?;

    if plugin.annotator().is_master(&id) {
        println!("{} {} is a master", "👑".green(), id.cyan());
    } else {
        println!("{} {} is not a master", "👤".yellow(), id.cyan());
    }

    Ok(())
}

async fn cmd_discord(token: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let mut discord = config.discord.clone().unwrap_or_default();
    if let Some(token) = token {
        discord.token = token;
    }
    if discord.token.is_empty() {
        bail!("No Discord token. Pass --token or set [discord].token in the config file.");
    }

    let plugin: Arc<dyn Star> = Arc::new(WhoIsMyMaster::new(config.plugin_config()));
    whoismymaster_integration_discord::run(discord, plugin)
        .await
        .context("Discord host stopped with an error")?;

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let discord: Option<&DiscordConfig> = config.discord.as_ref();

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Masters: {}", config.master_id.len());
    println!(
        "  Discord Token: {}",
        if discord.is_some_and(|d| !d.token.is_empty()) {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Command Prefix: {}",
        discord.map(|d| d.command_prefix.as_str()).unwrap_or("/").cyan()
    );

    Ok(())
}
