#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    TelegramApi(#[from] teloxide::RequestError),

    #[error("Rate API error: {0}")]
    RateApi(#[from] reqwest::Error),

    #[error("Snapshot read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payment not found")]
    PaymentNotFound,

    #[error("Inconsistent payment {0}: {1}")]
    InconsistentPayment(String, String),

    #[error("Unknown coin unit: {0}")]
    UnknownCoinUnit(String),

    #[error("No exchange rate for fiat code {0}")]
    UnknownFiatCode(String),

    #[error("Invalid callback data: {0}")]
    InvalidCallbackData(String),

    #[error("Invalid payment hash: {0}")]
    InvalidPaymentHash(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration {0}: {1}")]
    InvalidConfig(String, String),
}
