use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::entity::BotError;

/// Source of BTC prices in fiat currencies
#[async_trait]
pub trait RateService: Send + Sync {
    /// Price of one bitcoin in the given fiat currency
    async fn get_btc_price(&self, fiat_code: &str) -> Result<Decimal>;
}

#[derive(Debug, Deserialize)]
struct TickerEntry {
    last: f64,
}

/// Rate service backed by a blockchain.info style ticker endpoint
pub struct BlockchainInfoRateService {
    http_client: Client,
    ticker_url: String,
}

impl BlockchainInfoRateService {
    pub fn new(ticker_url: String) -> Self {
        Self {
            http_client: Client::new(),
            ticker_url,
        }
    }

    fn price_from_ticker(ticker: &HashMap<String, TickerEntry>, fiat_code: &str) -> Result<Decimal> {
        let entry = ticker
            .get(&fiat_code.to_uppercase())
            .ok_or_else(|| BotError::UnknownFiatCode(fiat_code.to_string()))?;

        Decimal::from_f64(entry.last).ok_or_else(|| anyhow!("Invalid price for {}: {}", fiat_code, entry.last))
    }
}

#[async_trait]
impl RateService for BlockchainInfoRateService {
    async fn get_btc_price(&self, fiat_code: &str) -> Result<Decimal> {
        debug!("Fetching BTC/{} rate from {}", fiat_code, self.ticker_url);

        let ticker = self
            .http_client
            .get(&self.ticker_url)
            .send()
            .await
            .map_err(BotError::from)?
            .error_for_status()
            .map_err(BotError::from)?
            .json::<HashMap<String, TickerEntry>>()
            .await
            .map_err(BotError::from)?;

        let price = Self::price_from_ticker(&ticker, fiat_code)?;
        info!("BTC/{} rate: {}", fiat_code, price);

        Ok(price)
    }
}

/// Rate service returning preset prices, for offline runs (`FIXED_BTC_PRICE`) and tests
pub struct FixedRateService {
    prices: HashMap<String, Decimal>,
}

impl FixedRateService {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        let prices = prices
            .into_iter()
            .map(|(code, price)| (code.to_uppercase(), price))
            .collect();
        Self { prices }
    }
}

#[async_trait]
impl RateService for FixedRateService {
    async fn get_btc_price(&self, fiat_code: &str) -> Result<Decimal> {
        self.prices
            .get(&fiat_code.to_uppercase())
            .copied()
            .ok_or_else(|| BotError::UnknownFiatCode(fiat_code.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_last_price_from_ticker() {
        let ticker: HashMap<String, TickerEntry> = serde_json::from_str(
            r#"{
                "USD": {"15m": 8001.5, "last": 8000.25, "buy": 8001.5, "sell": 8001.5, "symbol": "$"},
                "EUR": {"15m": 7200.0, "last": 7200.0, "buy": 7200.0, "sell": 7200.0, "symbol": "€"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            BlockchainInfoRateService::price_from_ticker(&ticker, "usd").unwrap(),
            Decimal::new(800025, 2)
        );

        let err = BlockchainInfoRateService::price_from_ticker(&ticker, "XYZ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BotError>(),
            Some(BotError::UnknownFiatCode(_))
        ));
    }

    #[tokio::test]
    async fn fixed_rates_are_case_insensitive() {
        let service = FixedRateService::new(HashMap::from([("eur".to_string(), Decimal::new(7200, 0))]));

        assert_eq!(service.get_btc_price("EUR").await.unwrap(), Decimal::new(7200, 0));
        assert!(service.get_btc_price("USD").await.is_err());
    }
}
