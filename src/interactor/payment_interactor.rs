use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::path::PathBuf;

use crate::entity::{BotError, NavigationKey, PaymentRecord};

/// Read access to the wallet's payment records
#[async_trait]
pub trait PaymentInteractor: Send + Sync {
    async fn list_payments(&self) -> Result<Vec<PaymentRecord>>;
    async fn find_payment(&self, key: NavigationKey) -> Result<PaymentRecord>;
}

/// Reads payments from a JSON snapshot exported by the wallet core.
///
/// The file is re-read on every call so the bot always shows the latest
/// export. Records whose status does not fit their direction are skipped.
pub struct SnapshotPaymentInteractor {
    snapshot_path: PathBuf,
}

impl SnapshotPaymentInteractor {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
        }
    }

    async fn load(&self) -> Result<Vec<PaymentRecord>> {
        let content = tokio::fs::read_to_string(&self.snapshot_path)
            .await
            .map_err(BotError::from)
            .with_context(|| format!("Failed to read {}", self.snapshot_path.display()))?;

        let records: Vec<PaymentRecord> = serde_json::from_str(&content)
            .map_err(BotError::from)
            .with_context(|| format!("Failed to parse {}", self.snapshot_path.display()))?;

        let total = records.len();
        let payments: Vec<PaymentRecord> = records
            .into_iter()
            .filter(|payment| match payment.validate() {
                Ok(()) => {
                    if payment.has_unused_settlement_fields() {
                        debug!(
                            "Payment {} is {} but carries settlement fields, ignoring them",
                            payment.payment_hash, payment.status
                        );
                    }
                    true
                }
                Err(e) => {
                    warn!("Skipping payment from snapshot: {}", e);
                    false
                }
            })
            .collect();

        debug!(
            "Loaded {} of {} payments from {}",
            payments.len(),
            total,
            self.snapshot_path.display()
        );

        Ok(payments)
    }
}

#[async_trait]
impl PaymentInteractor for SnapshotPaymentInteractor {
    async fn list_payments(&self) -> Result<Vec<PaymentRecord>> {
        self.load().await
    }

    async fn find_payment(&self, key: NavigationKey) -> Result<PaymentRecord> {
        let payments = self.load().await?;

        payments
            .into_iter()
            .find(|payment| key.matches(payment))
            .ok_or_else(|| BotError::PaymentNotFound.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Direction, PaymentIdentifier, PaymentStatus};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"[
        {
            "direction": "outgoing",
            "status": "succeeded",
            "final_amount": 50000,
            "completed_at": "2019-11-05T10:00:00Z",
            "description": "coffee",
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "payment_hash": "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        },
        {
            "direction": "incoming",
            "status": "received",
            "final_amount": 120000,
            "completed_at": "2019-11-05T11:00:00Z",
            "payment_hash": "60303ae22b998861bce3b28f33eec1be758a213c86c93c076dbe9f558c11c752"
        },
        {
            "direction": "incoming",
            "status": "pending",
            "payment_hash": "fd61a03af4f77d870fc21e05e7e80678095c92d808cfb3b5c279ee04c74aca13"
        },
        {
            "direction": "outgoing",
            "status": "pending",
            "completed_at": "2019-11-05T12:00:00Z",
            "description": "in flight",
            "payment_hash": "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        }
    ]"#;

    fn snapshot_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn skips_inconsistent_records() {
        let file = snapshot_file();
        let interactor = SnapshotPaymentInteractor::new(file.path());

        let payments = interactor.list_payments().await.unwrap();
        assert_eq!(payments.len(), 3);
        assert!(payments.iter().all(|p| p.validate().is_ok()));
    }

    #[tokio::test]
    async fn keeps_pending_payment_with_completion_time() {
        let file = snapshot_file();
        let interactor = SnapshotPaymentInteractor::new(file.path());

        let payments = interactor.list_payments().await.unwrap();
        let pending = payments
            .iter()
            .find(|p| p.status == PaymentStatus::Pending)
            .unwrap();
        assert_eq!(pending.description.as_deref(), Some("in flight"));
        assert!(pending.completed_at.is_some());
    }

    #[tokio::test]
    async fn finds_outgoing_payment_by_id_and_incoming_by_hash() {
        let file = snapshot_file();
        let interactor = SnapshotPaymentInteractor::new(file.path());

        let outgoing = interactor
            .find_payment(NavigationKey {
                direction: Direction::Outgoing,
                identifier: PaymentIdentifier::Id(
                    "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap(),
                ),
            })
            .await
            .unwrap();
        assert_eq!(outgoing.description.as_deref(), Some("coffee"));

        let incoming = interactor
            .find_payment(NavigationKey {
                direction: Direction::Incoming,
                identifier: PaymentIdentifier::Hash(
                    "60303ae22b998861bce3b28f33eec1be758a213c86c93c076dbe9f558c11c752"
                        .parse()
                        .unwrap(),
                ),
            })
            .await
            .unwrap();
        assert_eq!(incoming.final_amount.map(|a| a.as_u64()), Some(120_000));
    }

    #[tokio::test]
    async fn unknown_key_is_not_found() {
        let file = snapshot_file();
        let interactor = SnapshotPaymentInteractor::new(file.path());

        let err = interactor
            .find_payment(NavigationKey {
                direction: Direction::Incoming,
                identifier: PaymentIdentifier::Hash(
                    "fd61a03af4f77d870fc21e05e7e80678095c92d808cfb3b5c279ee04c74aca13"
                        .parse()
                        .unwrap(),
                ),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BotError>(),
            Some(BotError::PaymentNotFound)
        ));
    }

    #[tokio::test]
    async fn missing_snapshot_is_an_error() {
        let interactor = SnapshotPaymentInteractor::new("/nonexistent/payments.json");
        assert!(interactor.list_payments().await.is_err());
    }
}
