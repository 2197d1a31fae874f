use serde::{Deserialize, Serialize};

use crate::entity::CoinUnit;

/// How amounts should be displayed to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub fiat_code: String,
    pub coin_unit: CoinUnit,
    pub display_amount_as_fiat: bool,
}

impl DisplayPreferences {
    /// Label shown next to an amount: the fiat code or the coin unit
    pub fn unit_label(&self) -> String {
        if self.display_amount_as_fiat {
            self.fiat_code.clone()
        } else {
            self.coin_unit.short_label().to_string()
        }
    }
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            fiat_code: "USD".to_string(),
            coin_unit: CoinUnit::Sat,
            display_amount_as_fiat: false,
        }
    }
}
