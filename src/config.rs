use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

use crate::entity::{BotError, CoinUnit, DisplayPreferences};

const DEFAULT_PAYMENTS_FILE: &str = "payments.json";
const DEFAULT_RATE_API_URL: &str = "https://blockchain.info/ticker";
const DEFAULT_PAYMENT_LIST_LIMIT: usize = 20;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub bot_token: String,

    /// JSON snapshot of payments exported by the wallet core
    pub payments_file: PathBuf,

    /// Ticker endpoint for BTC fiat prices
    pub rate_api_url: String,

    /// Preset BTC price in the display fiat currency; replaces the ticker when set
    pub fixed_btc_price: Option<Decimal>,

    /// How amounts are shown in payment rows
    pub display: DisplayPreferences,

    /// Maximum number of rows in the payment list
    pub payment_list_limit: usize,
}

impl Config {
    /// Builds the configuration from environment variables
    pub fn from_env() -> Result<Self, BotError> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| BotError::MissingConfig("TELEGRAM_BOT_TOKEN".to_string()))?;

        Self::from_lookup(bot_token, |key| env::var(key).ok())
    }

    fn from_lookup<F>(bot_token: String, lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let coin_unit = match lookup("COIN_UNIT") {
            Some(unit) => unit.parse::<CoinUnit>()?,
            None => CoinUnit::Sat,
        };

        let display_amount_as_fiat = lookup("DISPLAY_AMOUNT_AS_FIAT")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let payment_list_limit = lookup("PAYMENT_LIST_LIMIT")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAYMENT_LIST_LIMIT);

        let fixed_btc_price = match lookup("FIXED_BTC_PRICE") {
            Some(value) => Some(value.trim().parse::<Decimal>().map_err(|e| {
                BotError::InvalidConfig("FIXED_BTC_PRICE".to_string(), e.to_string())
            })?),
            None => None,
        };

        Ok(Self {
            bot_token,
            payments_file: lookup("PAYMENTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PAYMENTS_FILE)),
            rate_api_url: lookup("RATE_API_URL")
                .unwrap_or_else(|| DEFAULT_RATE_API_URL.to_string()),
            fixed_btc_price,
            display: DisplayPreferences {
                fiat_code: lookup("FIAT_CODE")
                    .map(|code| code.trim().to_uppercase())
                    .unwrap_or_else(|| "USD".to_string()),
                coin_unit,
                display_amount_as_fiat,
            },
            payment_list_limit,
        })
    }
}
