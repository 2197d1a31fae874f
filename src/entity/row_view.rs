use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::entity::{Direction, PaymentHash, PaymentRecord};

/// Semantic color of the amount text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AmountColor {
    Positive,
    Neutral,
}

/// Semantic color of the description text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DescriptionColor {
    Normal,
    Muted,
    Error,
}

/// Icon treatment for the payment outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AvatarStyle {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDescription {
    pub text: String,
    pub is_placeholder: bool,
}

/// Identifier used to find a payment again: the internal id of an outgoing
/// payment, or the payment hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentIdentifier {
    Id(Uuid),
    Hash(PaymentHash),
}

impl fmt::Display for PaymentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentIdentifier::Id(id) => write!(f, "{}", id),
            PaymentIdentifier::Hash(hash) => write!(f, "{}", hash),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationKey {
    pub direction: Direction,
    pub identifier: PaymentIdentifier,
}

impl NavigationKey {
    /// Outgoing payments are keyed by id when they have one, everything else
    /// by payment hash.
    pub fn for_payment(payment: &PaymentRecord) -> Self {
        let identifier = match (payment.direction, payment.id) {
            (Direction::Outgoing, Some(id)) => PaymentIdentifier::Id(id),
            _ => PaymentIdentifier::Hash(payment.payment_hash),
        };

        Self {
            direction: payment.direction,
            identifier,
        }
    }

    pub fn matches(&self, payment: &PaymentRecord) -> bool {
        *self == NavigationKey::for_payment(payment)
    }
}

/// Display directives for one payment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRowView {
    pub amount_text: Option<String>,
    pub amount_color: Option<AmountColor>,
    pub unit_text: Option<String>,
    pub description: RowDescription,
    pub description_color: DescriptionColor,
    pub avatar_style: AvatarStyle,
    pub timestamp_text: Option<String>,
    pub navigation_key: NavigationKey,
}
