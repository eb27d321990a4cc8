//! # Valentine Bot Main Entry Point
//!
//! Initializes logging, loads configuration, starts the reminder service,
//! and runs the Telegram bot until a shutdown signal arrives.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valentine_bot::bot::handlers::BotHandler;
use valentine_bot::config::Config;
use valentine_bot::context::AppContext;
use valentine_bot::services::scheduler::ReminderService;
use valentine_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valentine_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Valentine Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Mini app: {}, Recipient: {}",
        config.mini_app_url, config.recipient_chat_id
    );

    // Initialize bot and shared state
    let bot = Bot::new(&config.telegram_bot_token);
    let ctx = Arc::new(AppContext::new(config));
    let handler = BotHandler::new(ctx.clone());

    // Initialize and start reminder service
    let mut reminder_service = match ReminderService::new(bot.clone(), ctx).await {
        Ok(service) => {
            info!("Reminder service initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create reminder service: {}", e);
            return Err(anyhow::anyhow!("Failed to create reminder service: {}", e));
        }
    };

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
    } else {
        info!("Reminder service started successfully");
    }

    log_system_event("bot_started", None);

    // Blocks until ctrl-c
    Dispatcher::builder(bot, handler.schema())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Stop reminder service on shutdown
    if let Err(e) = reminder_service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }

    log_system_event("bot_stopped", None);
    Ok(())
}
