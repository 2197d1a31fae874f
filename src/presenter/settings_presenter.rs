use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::entity::Destination;
use crate::view::settings_view::SettingsView;

#[async_trait]
pub trait SettingsPresenter: Send + Sync {
    async fn show_settings_menu(&self) -> Result<()>;
    async fn show_main_menu(&self) -> Result<()>;
    async fn open(&self, destination: Destination) -> Result<()>;
}

pub struct SettingsPresenterImpl<V> {
    view: Arc<V>,
}

impl<V> SettingsPresenterImpl<V>
where
    V: SettingsView,
{
    pub fn new(view: Arc<V>) -> Self {
        Self { view }
    }
}

/// Title of a screen owned by the wallet node, if the destination is one
pub fn wallet_screen_title(destination: Destination) -> Option<&'static str> {
    match destination {
        Destination::CloseAllChannels => Some("Close all channels"),
        Destination::DisplaySeed => Some("Display seed"),
        Destination::ListChannels => Some("List all channels"),
        Destination::Logs => Some("Logs"),
        Destination::Back
        | Destination::Payments
        | Destination::PaymentDetails { .. }
        | Destination::Settings => None,
    }
}

#[async_trait]
impl<V> SettingsPresenter for SettingsPresenterImpl<V>
where
    V: SettingsView + Send + Sync,
{
    async fn show_settings_menu(&self) -> Result<()> {
        self.view.display_settings_menu().await
    }

    async fn show_main_menu(&self) -> Result<()> {
        self.view.display_main_menu().await
    }

    async fn open(&self, destination: Destination) -> Result<()> {
        match destination {
            Destination::Back => self.view.display_main_menu().await?,
            Destination::Settings => self.view.display_settings_menu().await?,
            other => match wallet_screen_title(other) {
                Some(title) => {
                    info!("Handing off {:?} to the wallet node", other);
                    self.view.display_wallet_screen_handoff(title).await?;
                }
                None => {
                    warn!("Settings cannot open {:?}", other);
                    self.view.display_settings_menu().await?;
                }
            },
        }

        Ok(())
    }
}
