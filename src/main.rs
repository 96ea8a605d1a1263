use std::env;
use std::sync::Arc;

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use matchday::bot;
use matchday::catalog::{Catalog, SportsApiClient, SportsApiConfig};
use matchday::dialogue::SelectionState;
use matchday::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Matchday Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize localized message bundles
    init_localization()?;

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    let client = Arc::new(SportsApiClient::new(SportsApiConfig::from_env()?));

    // Load the league catalog once; a failure leaves the menus unavailable
    // until the process is restarted
    let catalog = match client.load_leagues().await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "League catalog load failed, menus unavailable until restart");
            Catalog::default()
        }
    };
    let catalog = Arc::new(catalog);

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with per-chat dialogue state
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<SelectionState>, SelectionState>()
                .endpoint(bot::message_handler),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<SelectionState>, SelectionState>()
                .endpoint(bot::callback_handler),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<SelectionState>::new(),
            catalog,
            client
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
