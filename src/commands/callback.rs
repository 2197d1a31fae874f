use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{build_payment_presenter, build_settings_presenter};
use crate::di::ServiceContainer;
use crate::entity::{Destination, NavigationKey};
use crate::presenter::{PaymentListPresenter, SettingsPresenter};

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };

    // Get the chat ID
    let chat_id = match q.message {
        Some(ref msg) => msg.chat().id,
        None => return Ok(()),
    };

    let telegram_id = q.from.id.0 as i64;

    info!(
        "Received callback: {} from user {}",
        callback_data, telegram_id
    );

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    let destination = match Destination::from_callback_data(&callback_data) {
        Ok(destination) => destination,
        Err(e) => {
            warn!("{}", e);
            bot.send_message(chat_id, "This button is no longer supported.")
                .await?;
            return Ok(());
        }
    };

    navigate(bot, chat_id, destination, services).await
}

/// Opens the screen for a destination in the given chat
pub async fn navigate(
    bot: Bot,
    chat_id: ChatId,
    destination: Destination,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    match destination {
        Destination::Payments => {
            build_payment_presenter(bot, chat_id, &services)
                .show_payments()
                .await?;
        }
        Destination::PaymentDetails {
            direction,
            identifier,
        } => {
            build_payment_presenter(bot, chat_id, &services)
                .show_payment_details(NavigationKey {
                    direction,
                    identifier,
                })
                .await?;
        }
        Destination::Back
        | Destination::Settings
        | Destination::CloseAllChannels
        | Destination::DisplaySeed
        | Destination::ListChannels
        | Destination::Logs => {
            build_settings_presenter(bot, chat_id).open(destination).await?;
        }
    }

    Ok(())
}
