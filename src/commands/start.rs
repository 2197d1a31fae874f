use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::{build_settings_presenter, CommandHandler};
use crate::di::ServiceContainer;
use crate::presenter::SettingsPresenter;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot and show the main menu"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Start command received from Telegram ID: {}", telegram_id);

        bot.send_message(
            chat_id,
            "<b>Hello!</b> I show the payment history of your Lightning wallet.",
        )
        .parse_mode(ParseMode::Html)
        .await?;

        build_settings_presenter(bot, chat_id).show_main_menu().await?;

        Ok(())
    }
}
