mod bot_error;
mod coin_unit;
mod destination;
mod payment;
mod preferences;
mod row_view;

pub use bot_error::BotError;
pub use coin_unit::CoinUnit;
pub use destination::{Destination, MAX_CALLBACK_DATA_LEN};
pub use payment::{Direction, MilliSatoshi, PaymentHash, PaymentRecord, PaymentStatus};
pub use preferences::DisplayPreferences;
pub use row_view::{
    AmountColor, AvatarStyle, DescriptionColor, NavigationKey, PaymentIdentifier, PaymentRowView,
    RowDescription,
};
