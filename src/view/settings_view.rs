use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    Bot,
};

use crate::entity::Destination;

#[async_trait]
pub trait SettingsView: Send + Sync {
    async fn display_settings_menu(&self) -> Result<()>;
    async fn display_main_menu(&self) -> Result<()>;
    async fn display_wallet_screen_handoff(&self, screen_title: &str) -> Result<()>;
}

pub fn settings_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "Close all channels",
            Destination::CloseAllChannels.to_callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "Display seed",
            Destination::DisplaySeed.to_callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "List all channels",
            Destination::ListChannels.to_callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "Logs",
            Destination::Logs.to_callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "Back",
            Destination::Back.to_callback_data(),
        )],
    ])
}

pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Payments", Destination::Payments.to_callback_data()),
        InlineKeyboardButton::callback("Settings", Destination::Settings.to_callback_data()),
    ]])
}

pub struct TelegramSettingsView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSettingsView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SettingsView for TelegramSettingsView {
    async fn display_settings_menu(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "<b>Settings</b>".to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(settings_keyboard())
            .await?;

        Ok(())
    }

    async fn display_main_menu(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "<b>Lightning Wallet</b>\n\nWhat would you like to see?")
            .parse_mode(ParseMode::Html)
            .reply_markup(main_menu_keyboard())
            .await?;

        Ok(())
    }

    async fn display_wallet_screen_handoff(&self, screen_title: &str) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "Back to Settings",
            Destination::Settings.to_callback_data(),
        )]]);

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "<b>{}</b> is handled by the wallet node. Open it from the wallet app.",
                    screen_title
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;

        Ok(())
    }
}
