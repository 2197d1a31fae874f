use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::{self, callback::handle_callback, BotCommands, CommandHandler};
use crate::di::ServiceContainer;

// Base router trait
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let services_for_start = self.services.clone();
        let services_for_payments = self.services.clone();
        let services_for_settings = self.services.clone();
        let services_for_help = self.services.clone();
        let services_for_callbacks = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_start.clone();
                let telegram_id = sender_id(&msg);
                async move {
                    commands::start::StartCommand::execute(bot, msg, telegram_id, services).await
                }
            }))
            .branch(case![BotCommands::Payments].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_payments.clone();
                let telegram_id = sender_id(&msg);
                async move {
                    commands::payments::PaymentsCommand::execute(bot, msg, telegram_id, services)
                        .await
                }
            }))
            .branch(case![BotCommands::Settings].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_settings.clone();
                let telegram_id = sender_id(&msg);
                async move {
                    commands::settings::SettingsCommand::execute(bot, msg, telegram_id, services)
                        .await
                }
            }))
            .branch(case![BotCommands::Help].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_help.clone();
                let telegram_id = sender_id(&msg);
                async move {
                    commands::help::HelpCommand::execute(bot, msg, telegram_id, services).await
                }
            }));

        let message_handler = Update::filter_message().branch(command_handler);

        // Add callback query handler for our buttons
        let callback_handler =
            Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let services = services_for_callbacks.clone();
                async move { handle_callback(bot, q, services).await }
            });

        dptree::entry()
            .branch(message_handler)
            .branch(callback_handler)
    }
}

fn sender_id(msg: &Message) -> i64 {
    msg.from.as_ref().map_or(0, |user| user.id.0 as i64)
}
