//! Lightning Wallet Bot for Telegram - Main executable
//!
//! Shows the payment history of a Lightning wallet as Telegram messages and
//! gives access to the wallet settings screens.
use anyhow::Context;
use dotenv::dotenv;
use lightning_wallet_bot::{Config, Router};
use log::info;
use teloxide::{dptree, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Lightning Wallet Telegram Bot v{}",
        lightning_wallet_bot::VERSION
    );

    // Load and validate environment variables
    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        "Reading payments from {}, amounts in {}",
        config.payments_file.display(),
        config.display.unit_label()
    );

    // Create Telegram bot instance
    let bot = Bot::new(config.bot_token.clone());

    info!("Initializing bot application...");
    let (router, bot, services) = lightning_wallet_bot::create_application(bot, config);

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
