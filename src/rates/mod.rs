pub mod rate_service;

pub use rate_service::{BlockchainInfoRateService, FixedRateService, RateService};
