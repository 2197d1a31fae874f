pub mod payment_view;
pub mod settings_view;

pub use payment_view::{PaymentListView, TelegramPaymentListView};
pub use settings_view::{SettingsView, TelegramSettingsView};
