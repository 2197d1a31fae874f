use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::entity::BotError;

/// Direction of a payment relative to this wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn is_outgoing(&self) -> bool {
        matches!(self, Direction::Outgoing)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// Status of a payment.
///
/// `Pending`, `Failed` and `Succeeded` describe outgoing payments,
/// `Received` describes incoming ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Failed,
    Succeeded,
    Received,
}

impl PaymentStatus {
    pub fn belongs_to(&self, direction: Direction) -> bool {
        match self {
            PaymentStatus::Pending | PaymentStatus::Failed | PaymentStatus::Succeeded => {
                direction == Direction::Outgoing
            }
            PaymentStatus::Received => direction == Direction::Incoming,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Succeeded => write!(f, "SUCCEEDED"),
            PaymentStatus::Received => write!(f, "RECEIVED"),
        }
    }
}

/// Amount in millisatoshi
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilliSatoshi(pub u64);

impl MilliSatoshi {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// 32-byte payment hash, hex encoded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaymentHash(pub [u8; 32]);

impl PaymentHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, BotError> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| BotError::InvalidPaymentHash(hex::encode(bytes)))?;
        Ok(Self(array))
    }
}

impl FromStr for PaymentHash {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| BotError::InvalidPaymentHash(s.to_string()))?;
        Self::from_slice(&bytes).map_err(|_| BotError::InvalidPaymentHash(s.to_string()))
    }
}

impl fmt::Display for PaymentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for PaymentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PaymentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A payment as exported by the wallet core. Read-only from the bot's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub direction: Direction,
    pub status: PaymentStatus,
    #[serde(default)]
    pub final_amount: Option<MilliSatoshi>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub id: Option<Uuid>,
    pub payment_hash: PaymentHash,
}

impl PaymentRecord {
    /// Checks that the status matches the direction. Settlement fields on
    /// unsettled payments are tolerated; the row mapping ignores them.
    pub fn validate(&self) -> Result<(), BotError> {
        let inconsistent = |reason: &str| {
            BotError::InconsistentPayment(self.payment_hash.to_string(), reason.to_string())
        };

        if !self.status.belongs_to(self.direction) {
            return Err(inconsistent(&format!(
                "status {} is not valid for an {} payment",
                self.status, self.direction
            )));
        }

        Ok(())
    }

    /// Whether the record carries settlement fields its status does not use
    pub fn has_unused_settlement_fields(&self) -> bool {
        match self.status {
            PaymentStatus::Pending => self.final_amount.is_some() || self.completed_at.is_some(),
            PaymentStatus::Failed => self.final_amount.is_some(),
            PaymentStatus::Succeeded | PaymentStatus::Received => false,
        }
    }
}
