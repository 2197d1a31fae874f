use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::cmp::Reverse;
use std::sync::Arc;

use crate::converter::{AmountFormatter, AmountTarget, Converter};
use crate::entity::{
    AmountColor, AvatarStyle, BotError, DescriptionColor, DisplayPreferences, NavigationKey,
    PaymentRecord, PaymentRowView, PaymentStatus, RowDescription,
};
use crate::interactor::PaymentInteractor;
use crate::rates::RateService;
use crate::utils::{format_relative_time, is_blank};
use crate::view::payment_view::PaymentListView;

pub const UNKNOWN_AMOUNT_LABEL: &str = "unknown";
pub const PROCESSING_LABEL: &str = "processing";
pub const NO_DESCRIPTION_LABEL: &str = "no description";

/// Turns payment records into row display directives.
///
/// Mapping is pure: the same payment, preferences and `now` always give the
/// same row.
pub struct PaymentRowMapper<F> {
    formatter: F,
}

impl<F: AmountFormatter> PaymentRowMapper<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn map(
        &self,
        payment: &PaymentRecord,
        preferences: &DisplayPreferences,
        now: DateTime<Utc>,
    ) -> PaymentRowView {
        let is_outgoing = payment.direction.is_outgoing();
        let relative_completion = payment
            .completed_at
            .map(|completed_at| format_relative_time(completed_at, now));

        let (amount_text, amount_color, unit_text, status_color, avatar_style, timestamp_text) =
            match payment.status {
                PaymentStatus::Succeeded | PaymentStatus::Received => {
                    let target = if preferences.display_amount_as_fiat {
                        AmountTarget::Fiat
                    } else {
                        AmountTarget::Native
                    };
                    let amount_text = match payment.final_amount {
                        Some(amount) => {
                            self.formatter
                                .format_amount(amount, target, true, is_outgoing)
                        }
                        None => UNKNOWN_AMOUNT_LABEL.to_string(),
                    };
                    let amount_color = if is_outgoing {
                        AmountColor::Neutral
                    } else {
                        AmountColor::Positive
                    };

                    (
                        Some(amount_text),
                        Some(amount_color),
                        Some(self.formatter.unit_label(target)),
                        DescriptionColor::Normal,
                        AvatarStyle::Success,
                        relative_completion,
                    )
                }
                PaymentStatus::Pending => (
                    None,
                    None,
                    None,
                    DescriptionColor::Normal,
                    AvatarStyle::Pending,
                    Some(PROCESSING_LABEL.to_string()),
                ),
                PaymentStatus::Failed => (
                    None,
                    None,
                    None,
                    DescriptionColor::Error,
                    AvatarStyle::Failed,
                    relative_completion,
                ),
            };

        // a blank description is replaced whatever the status
        let (description, description_color) = if is_blank(payment.description.as_deref()) {
            (
                RowDescription {
                    text: NO_DESCRIPTION_LABEL.to_string(),
                    is_placeholder: true,
                },
                DescriptionColor::Muted,
            )
        } else {
            (
                RowDescription {
                    text: payment.description.clone().unwrap_or_default(),
                    is_placeholder: false,
                },
                status_color,
            )
        };

        PaymentRowView {
            amount_text,
            amount_color,
            unit_text,
            description,
            description_color,
            avatar_style,
            timestamp_text,
            navigation_key: NavigationKey::for_payment(payment),
        }
    }
}

#[async_trait]
pub trait PaymentListPresenter: Send + Sync {
    async fn show_payments(&self) -> Result<()>;
    async fn show_payment_details(&self, key: NavigationKey) -> Result<()>;
}

pub struct PaymentListPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    rate_service: Arc<dyn RateService + Send + Sync>,
    preferences: DisplayPreferences,
    limit: usize,
}

impl<I, V> PaymentListPresenterImpl<I, V>
where
    I: PaymentInteractor,
    V: PaymentListView,
{
    pub fn new(
        interactor: Arc<I>,
        view: Arc<V>,
        rate_service: Arc<dyn RateService + Send + Sync>,
        preferences: DisplayPreferences,
        limit: usize,
    ) -> Self {
        Self {
            interactor,
            view,
            rate_service,
            preferences,
            limit,
        }
    }

    // Fiat rates are only fetched when amounts are shown in fiat
    async fn row_mapper(&self) -> PaymentRowMapper<Converter> {
        let btc_price = if self.preferences.display_amount_as_fiat {
            match self
                .rate_service
                .get_btc_price(&self.preferences.fiat_code)
                .await
            {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!(
                        "No BTC/{} rate available, fiat amounts hidden: {}",
                        self.preferences.fiat_code, e
                    );
                    None
                }
            }
        } else {
            None
        };

        PaymentRowMapper::new(Converter::from_preferences(&self.preferences, btc_price))
    }
}

/// Pending payments first, then most recently completed
pub fn sort_payments(payments: &mut [PaymentRecord]) {
    payments.sort_by_key(|payment| {
        (
            payment.status != PaymentStatus::Pending,
            Reverse(payment.completed_at),
        )
    });
}

#[async_trait]
impl<I, V> PaymentListPresenter for PaymentListPresenterImpl<I, V>
where
    I: PaymentInteractor + Send + Sync,
    V: PaymentListView + Send + Sync,
{
    async fn show_payments(&self) -> Result<()> {
        match self.interactor.list_payments().await {
            Ok(mut payments) => {
                if payments.is_empty() {
                    self.view.display_no_payments().await?;
                    return Ok(());
                }

                let total = payments.len();
                sort_payments(&mut payments);

                let mapper = self.row_mapper().await;
                let now = Utc::now();
                let rows = payments
                    .iter()
                    .take(self.limit)
                    .map(|payment| mapper.map(payment, &self.preferences, now))
                    .collect::<Vec<_>>();

                info!("Showing {} of {} payments", rows.len(), total);
                self.view.display_payments(rows, total).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn show_payment_details(&self, key: NavigationKey) -> Result<()> {
        match self.interactor.find_payment(key).await {
            Ok(payment) => {
                let mapper = self.row_mapper().await;
                let row = mapper.map(&payment, &self.preferences, Utc::now());
                self.view.display_payment_details(row, payment).await?;
            }
            Err(e) => match e.downcast_ref::<BotError>() {
                Some(BotError::PaymentNotFound) => {
                    self.view.display_payment_not_found().await?;
                }
                _ => {
                    self.view.display_error(e.to_string()).await?;
                }
            },
        }

        Ok(())
    }
}
