use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::di::ServiceContainer;
use crate::interactor::SnapshotPaymentInteractor;
use crate::presenter::{PaymentListPresenterImpl, SettingsPresenterImpl};
use crate::view::{TelegramPaymentListView, TelegramSettingsView};

pub mod callback;
pub mod help;
pub mod payments;
pub mod settings;
pub mod start;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command
    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            payments::PaymentsCommand::command_name(),
            payments::PaymentsCommand::description(),
        ),
        (
            settings::SettingsCommand::command_name(),
            settings::SettingsCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot and show the main menu")]
    Start,
    #[command(description = "show recent payments")]
    Payments,
    #[command(description = "open wallet settings")]
    Settings,
    #[command(description = "display this help message")]
    Help,
}

pub(crate) fn build_payment_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> PaymentListPresenterImpl<SnapshotPaymentInteractor, TelegramPaymentListView> {
    let view = Arc::new(TelegramPaymentListView::new(bot, chat_id));
    PaymentListPresenterImpl::new(
        services.payment_interactor(),
        view,
        services.rate_service(),
        services.display_preferences(),
        services.payment_list_limit(),
    )
}

pub(crate) fn build_settings_presenter(
    bot: Bot,
    chat_id: ChatId,
) -> SettingsPresenterImpl<TelegramSettingsView> {
    SettingsPresenterImpl::new(Arc::new(TelegramSettingsView::new(bot, chat_id)))
}
