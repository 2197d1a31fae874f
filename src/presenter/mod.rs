pub mod payment_presenter;
pub mod settings_presenter;

pub use payment_presenter::{
    PaymentListPresenter, PaymentListPresenterImpl, PaymentRowMapper, NO_DESCRIPTION_LABEL,
    PROCESSING_LABEL, UNKNOWN_AMOUNT_LABEL,
};
pub use settings_presenter::{SettingsPresenter, SettingsPresenterImpl};
