use rust_decimal::{Decimal, RoundingStrategy};

use crate::entity::{CoinUnit, DisplayPreferences, MilliSatoshi};

/// Shown in place of a fiat amount when no exchange rate is known
pub const NO_RATE_LABEL: &str = "N/A";

const MSAT_PER_BTC_SCALE: u32 = 11;

/// Unit system an amount is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTarget {
    Native,
    Fiat,
}

pub trait AmountFormatter: Send + Sync {
    fn format_amount(
        &self,
        amount: MilliSatoshi,
        target: AmountTarget,
        with_sign: bool,
        is_outgoing: bool,
    ) -> String;

    /// Label printed next to an amount formatted for `target`
    fn unit_label(&self, target: AmountTarget) -> String;
}

/// Converts millisatoshi amounts to the user's coin unit or to fiat
#[derive(Debug, Clone)]
pub struct Converter {
    coin_unit: CoinUnit,
    fiat_code: String,
    btc_price: Option<Decimal>,
}

impl Converter {
    pub fn new(coin_unit: CoinUnit, fiat_code: impl Into<String>, btc_price: Option<Decimal>) -> Self {
        Self {
            coin_unit,
            fiat_code: fiat_code.into(),
            btc_price,
        }
    }

    pub fn from_preferences(preferences: &DisplayPreferences, btc_price: Option<Decimal>) -> Self {
        Self::new(preferences.coin_unit, preferences.fiat_code.clone(), btc_price)
    }

    pub fn to_coin_unit(&self, amount: MilliSatoshi) -> Decimal {
        Decimal::from_i128_with_scale(amount.as_u64() as i128, self.coin_unit.msat_scale())
            .normalize()
    }

    pub fn to_fiat(&self, amount: MilliSatoshi) -> Option<Decimal> {
        let btc = Decimal::from_i128_with_scale(amount.as_u64() as i128, MSAT_PER_BTC_SCALE);
        self.btc_price.map(|price| {
            (btc * price).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
    }

    pub fn print_amount_pretty(&self, amount: MilliSatoshi, with_sign: bool, is_outgoing: bool) -> String {
        let value = self.to_coin_unit(amount);
        with_sign_prefix(group_thousands(&value.to_string()), value.is_zero(), with_sign, is_outgoing)
    }

    pub fn print_fiat_pretty(&self, amount: MilliSatoshi, with_sign: bool, is_outgoing: bool) -> String {
        match self.to_fiat(amount) {
            Some(value) => with_sign_prefix(
                group_thousands(&format!("{:.2}", value)),
                value.is_zero(),
                with_sign,
                is_outgoing,
            ),
            None => NO_RATE_LABEL.to_string(),
        }
    }
}

impl AmountFormatter for Converter {
    fn format_amount(
        &self,
        amount: MilliSatoshi,
        target: AmountTarget,
        with_sign: bool,
        is_outgoing: bool,
    ) -> String {
        match target {
            AmountTarget::Native => self.print_amount_pretty(amount, with_sign, is_outgoing),
            AmountTarget::Fiat => self.print_fiat_pretty(amount, with_sign, is_outgoing),
        }
    }

    fn unit_label(&self, target: AmountTarget) -> String {
        match target {
            AmountTarget::Native => self.coin_unit.short_label().to_string(),
            AmountTarget::Fiat => self.fiat_code.clone(),
        }
    }
}

fn with_sign_prefix(text: String, is_zero: bool, with_sign: bool, is_outgoing: bool) -> String {
    if !with_sign || is_zero {
        return text;
    }

    if is_outgoing {
        format!("-{}", text)
    } else {
        format!("+{}", text)
    }
}

// Insert "," between groups of three digits of the integer part
fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
    }

    #[test]
    fn converts_to_each_coin_unit() {
        let amount = MilliSatoshi(123_456_789);

        assert_eq!(Converter::new(CoinUnit::Sat, "USD", None).print_amount_pretty(amount, false, false), "123,456.789");
        assert_eq!(Converter::new(CoinUnit::Bit, "USD", None).print_amount_pretty(amount, false, false), "1,234.56789");
        assert_eq!(Converter::new(CoinUnit::MilliBtc, "USD", None).print_amount_pretty(amount, false, false), "1.23456789");
        assert_eq!(Converter::new(CoinUnit::Btc, "USD", None).print_amount_pretty(amount, false, false), "0.00123456789");
    }

    #[test]
    fn trims_trailing_zeros() {
        let converter = Converter::new(CoinUnit::Sat, "USD", None);
        assert_eq!(converter.print_amount_pretty(MilliSatoshi(50_000), false, false), "50");
        assert_eq!(converter.print_amount_pretty(MilliSatoshi(1_500), false, false), "1.5");
    }

    #[test]
    fn signs_by_direction() {
        let converter = Converter::new(CoinUnit::Sat, "USD", None);
        assert_eq!(converter.print_amount_pretty(MilliSatoshi(50_000), true, true), "-50");
        assert_eq!(converter.print_amount_pretty(MilliSatoshi(50_000), true, false), "+50");
        assert_eq!(converter.print_amount_pretty(MilliSatoshi(0), true, true), "0");
    }

    #[test]
    fn converts_to_fiat_with_two_decimals() {
        let converter = Converter::new(CoinUnit::Sat, "USD", Some(Decimal::new(8_000, 0)));

        // 100_000 sat at 8000/BTC
        assert_eq!(converter.print_fiat_pretty(MilliSatoshi(100_000_000), true, false), "+8.00");
        // 1 BTC
        assert_eq!(converter.print_fiat_pretty(MilliSatoshi(100_000_000_000), false, false), "8,000.00");
        // 125 sat rounds to a cent
        assert_eq!(converter.print_fiat_pretty(MilliSatoshi(125_000), true, true), "-0.01");
    }

    #[test]
    fn fiat_without_rate_is_not_available() {
        let converter = Converter::new(CoinUnit::Sat, "USD", None);
        assert_eq!(converter.print_fiat_pretty(MilliSatoshi(1_000), true, true), NO_RATE_LABEL);
    }

    #[test]
    fn unit_label_follows_the_converter() {
        let converter = Converter::new(CoinUnit::MilliBtc, "EUR", None);
        assert_eq!(converter.unit_label(AmountTarget::Native), "mBTC");
        assert_eq!(converter.unit_label(AmountTarget::Fiat), "EUR");
    }
}
