//! Discord gateway client

use std::sync::Arc;

use serenity::prelude::{Client, GatewayIntents};
use tracing::info;
use whoismymaster::Star;

use crate::config::DiscordConfig;
use crate::host::DiscordHost;

/// Run a plugin on Discord until the gateway connection ends
///
/// The plugin is initialized before connecting and terminated afterwards.
pub async fn run(config: DiscordConfig, plugin: Arc<dyn Star>) -> Result<(), serenity::Error> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    plugin.initialize().await;

    let handler = DiscordHost::new(config.clone(), Arc::clone(&plugin));
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await?;

    info!(plugin = %plugin.metadata().name, "Starting Discord host");
    let result = client.start().await;

    plugin.terminate().await;
    result
}
