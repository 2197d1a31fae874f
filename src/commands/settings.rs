use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{build_settings_presenter, CommandHandler};
use crate::di::ServiceContainer;
use crate::presenter::SettingsPresenter;

pub struct SettingsCommand;

impl CommandHandler for SettingsCommand {
    fn command_name() -> &'static str {
        "settings"
    }

    fn description() -> &'static str {
        "open wallet settings"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!(
            "Settings command received from Telegram ID: {}",
            telegram_id
        );

        build_settings_presenter(bot, msg.chat.id)
            .show_settings_menu()
            .await?;

        Ok(())
    }
}
