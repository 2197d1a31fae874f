use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::entity::{BotError, Direction, NavigationKey, PaymentHash, PaymentIdentifier};

/// Telegram rejects callback data longer than this
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// A screen the user can navigate to from a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Back,
    Payments,
    PaymentDetails {
        direction: Direction,
        identifier: PaymentIdentifier,
    },
    Settings,
    CloseAllChannels,
    DisplaySeed,
    ListChannels,
    Logs,
}

impl Destination {
    pub fn payment_details(key: NavigationKey) -> Self {
        Destination::PaymentDetails {
            direction: key.direction,
            identifier: key.identifier,
        }
    }

    pub fn to_callback_data(&self) -> String {
        match self {
            Destination::Back => "menu".to_string(),
            Destination::Payments => "payments".to_string(),
            Destination::Settings => "settings".to_string(),
            Destination::CloseAllChannels => "settings_close_channels".to_string(),
            Destination::DisplaySeed => "settings_display_seed".to_string(),
            Destination::ListChannels => "settings_list_channels".to_string(),
            Destination::Logs => "settings_logs".to_string(),
            Destination::PaymentDetails {
                direction,
                identifier,
            } => {
                let direction = match direction {
                    Direction::Outgoing => 'o',
                    Direction::Incoming => 'i',
                };
                let identifier = match identifier {
                    PaymentIdentifier::Id(id) => format!("u{}", id.simple()),
                    PaymentIdentifier::Hash(hash) => {
                        format!("h{}", URL_SAFE_NO_PAD.encode(hash.as_bytes()))
                    }
                };
                format!("pd:{}:{}", direction, identifier)
            }
        }
    }

    pub fn from_callback_data(data: &str) -> Result<Self, BotError> {
        lazy_static! {
            static ref PAYMENT_DETAILS_RE: Regex =
                Regex::new(r"^pd:([oi]):([uh])([A-Za-z0-9_-]+)$").unwrap();
        }

        let invalid = || BotError::InvalidCallbackData(data.to_string());

        match data {
            "menu" => return Ok(Destination::Back),
            "payments" => return Ok(Destination::Payments),
            "settings" => return Ok(Destination::Settings),
            "settings_close_channels" => return Ok(Destination::CloseAllChannels),
            "settings_display_seed" => return Ok(Destination::DisplaySeed),
            "settings_list_channels" => return Ok(Destination::ListChannels),
            "settings_logs" => return Ok(Destination::Logs),
            _ => {}
        }

        let cap = PAYMENT_DETAILS_RE.captures(data).ok_or_else(invalid)?;

        let direction = match &cap[1] {
            "o" => Direction::Outgoing,
            _ => Direction::Incoming,
        };
        let identifier = match &cap[2] {
            "u" => PaymentIdentifier::Id(Uuid::try_parse(&cap[3]).map_err(|_| invalid())?),
            _ => {
                let bytes = URL_SAFE_NO_PAD.decode(&cap[3]).map_err(|_| invalid())?;
                PaymentIdentifier::Hash(PaymentHash::from_slice(&bytes).map_err(|_| invalid())?)
            }
        };

        Ok(Destination::PaymentDetails {
            direction,
            identifier,
        })
    }
}
