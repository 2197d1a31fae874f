use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::BotError;

/// Unit used to display native bitcoin amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinUnit {
    Sat,
    Bit,
    MilliBtc,
    Btc,
}

impl CoinUnit {
    pub fn short_label(&self) -> &'static str {
        match self {
            CoinUnit::Sat => "sat",
            CoinUnit::Bit => "bits",
            CoinUnit::MilliBtc => "mBTC",
            CoinUnit::Btc => "BTC",
        }
    }

    /// Number of decimal places between millisatoshi and this unit
    pub fn msat_scale(&self) -> u32 {
        match self {
            CoinUnit::Sat => 3,
            CoinUnit::Bit => 5,
            CoinUnit::MilliBtc => 8,
            CoinUnit::Btc => 11,
        }
    }
}

impl FromStr for CoinUnit {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sat" | "sats" | "satoshi" => Ok(CoinUnit::Sat),
            "bit" | "bits" => Ok(CoinUnit::Bit),
            "mbtc" => Ok(CoinUnit::MilliBtc),
            "btc" => Ok(CoinUnit::Btc),
            _ => Err(BotError::UnknownCoinUnit(s.to_string())),
        }
    }
}

impl fmt::Display for CoinUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_label())
    }
}
