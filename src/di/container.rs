use log::info;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::entity::DisplayPreferences;
use crate::interactor::SnapshotPaymentInteractor;
use crate::rates::{BlockchainInfoRateService, FixedRateService, RateService};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Payment history source
    payment_interactor: Arc<SnapshotPaymentInteractor>,

    // Fiat rates
    rate_service: Arc<dyn RateService + Send + Sync>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a new service container from the application configuration
    pub fn new(config: Config) -> Self {
        let payment_interactor = Arc::new(SnapshotPaymentInteractor::new(
            config.payments_file.clone(),
        ));

        let rate_service: Arc<dyn RateService + Send + Sync> = match config.fixed_btc_price {
            Some(price) => {
                info!("Using fixed BTC/{} price {}", config.display.fiat_code, price);
                Arc::new(FixedRateService::new(HashMap::from([(
                    config.display.fiat_code.clone(),
                    price,
                )])))
            }
            None => Arc::new(BlockchainInfoRateService::new(config.rate_api_url.clone())),
        };

        Self {
            payment_interactor,
            rate_service,
            config,
        }
    }

    // Accessor methods

    pub fn payment_interactor(&self) -> Arc<SnapshotPaymentInteractor> {
        self.payment_interactor.clone()
    }

    pub fn rate_service(&self) -> Arc<dyn RateService + Send + Sync> {
        self.rate_service.clone()
    }

    pub fn display_preferences(&self) -> DisplayPreferences {
        self.config.display.clone()
    }

    pub fn payment_list_limit(&self) -> usize {
        self.config.payment_list_limit
    }
}
