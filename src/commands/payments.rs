use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{build_payment_presenter, CommandHandler};
use crate::di::ServiceContainer;
use crate::presenter::PaymentListPresenter;

pub struct PaymentsCommand;

impl CommandHandler for PaymentsCommand {
    fn command_name() -> &'static str {
        "payments"
    }

    fn description() -> &'static str {
        "show recent payments"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!(
            "Payments command received from Telegram ID: {}",
            telegram_id
        );

        build_payment_presenter(bot, msg.chat.id, &services)
            .show_payments()
            .await?;

        Ok(())
    }
}
