pub mod commands;
pub mod config;
pub mod converter;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod rates;
pub mod router;
pub mod utils;
pub mod view;

use std::sync::Arc;
use teloxide::Bot;

// Re-export commonly used items
pub use commands::*;
pub use config::Config;
pub use converter::*;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use rates::*;
pub use router::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the bot, its services and the router together
pub fn create_application(bot: Bot, config: Config) -> (TelegramRouter, Bot, Arc<ServiceContainer>) {
    let services = Arc::new(ServiceContainer::new(config));
    let router = TelegramRouter::new(services.clone());

    (router, bot, services)
}
