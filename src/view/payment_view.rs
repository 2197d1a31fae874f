use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    utils::html,
    Bot,
};

use crate::entity::{
    AmountColor, AvatarStyle, DescriptionColor, Destination, PaymentRecord, PaymentRowView,
};
use crate::utils::{shorten_identifier, truncate_text};

/// Telegram rejects messages longer than this, counted in UTF-16 code units
pub const MAX_MESSAGE_LEN: usize = 4096;

const MAX_DESCRIPTION_CHARS: usize = 120;

// Room kept for the "Showing N of M payments" footer
const FOOTER_RESERVE: usize = 64;

#[async_trait]
pub trait PaymentListView: Send + Sync {
    async fn display_payments(&self, rows: Vec<PaymentRowView>, total: usize) -> Result<()>;
    async fn display_no_payments(&self) -> Result<()>;
    async fn display_payment_details(&self, row: PaymentRowView, payment: PaymentRecord) -> Result<()>;
    async fn display_payment_not_found(&self) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub fn avatar_icon(style: AvatarStyle) -> &'static str {
    match style {
        AvatarStyle::Success => "✅",
        AvatarStyle::Pending => "⏳",
        AvatarStyle::Failed => "❌",
    }
}

/// Renders one row as Telegram HTML
pub fn render_row(row: &PaymentRowView) -> String {
    let mut text = format!("{} ", avatar_icon(row.avatar_style));

    if let Some(amount) = &row.amount_text {
        let amount = match &row.unit_text {
            Some(unit) => format!("{} {}", html::escape(amount), html::escape(unit)),
            None => html::escape(amount),
        };
        match row.amount_color {
            Some(AmountColor::Positive) => text.push_str(&format!("<b>{}</b> · ", amount)),
            _ => text.push_str(&format!("{} · ", amount)),
        }
    }

    let description = html::escape(&truncate_text(&row.description.text, MAX_DESCRIPTION_CHARS));
    match row.description_color {
        DescriptionColor::Normal => text.push_str(&description),
        DescriptionColor::Muted => text.push_str(&format!("<i>{}</i>", description)),
        DescriptionColor::Error => text.push_str(&format!("⚠️ {}", description)),
    }

    if let Some(timestamp) = &row.timestamp_text {
        text.push_str(&format!("\n<i>{}</i>", html::escape(timestamp)));
    }

    text
}

fn row_button_label(row: &PaymentRowView) -> String {
    let summary = match (&row.amount_text, &row.unit_text) {
        (Some(amount), Some(unit)) => format!("{} {}", amount, unit),
        (Some(amount), None) => amount.clone(),
        _ => truncate_text(&row.description.text, MAX_DESCRIPTION_CHARS),
    };
    format!("{} {}", avatar_icon(row.avatar_style), summary)
}

fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Builds the list message from as many rows as fit in one Telegram message.
/// Returns the text and the number of rows it shows.
pub fn payments_message(rows: &[PaymentRowView], total: usize) -> (String, usize) {
    let mut text = "<b>Payments</b>\n\n".to_string();
    let mut shown = 0;

    for row in rows {
        let entry = format!("{}\n\n", render_row(row));
        if message_len(&text) + message_len(&entry) + FOOTER_RESERVE > MAX_MESSAGE_LEN {
            break;
        }
        text.push_str(&entry);
        shown += 1;
    }

    if total > shown {
        text.push_str(&format!("<i>Showing {} of {} payments</i>", shown, total));
    }

    (text.trim_end().to_string(), shown)
}

pub fn payments_keyboard(rows: &[PaymentRowView]) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = rows
        .iter()
        .map(|row| {
            vec![InlineKeyboardButton::callback(
                row_button_label(row),
                Destination::payment_details(row.navigation_key).to_callback_data(),
            )]
        })
        .collect();

    buttons.push(vec![
        InlineKeyboardButton::callback("🔄 Refresh", Destination::Payments.to_callback_data()),
        InlineKeyboardButton::callback("Settings", Destination::Settings.to_callback_data()),
    ]);
    buttons.push(vec![InlineKeyboardButton::callback(
        "Back to Menu",
        Destination::Back.to_callback_data(),
    )]);

    InlineKeyboardMarkup::new(buttons)
}

pub struct TelegramPaymentListView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramPaymentListView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl PaymentListView for TelegramPaymentListView {
    async fn display_payments(&self, rows: Vec<PaymentRowView>, total: usize) -> Result<()> {
        let (text, shown) = payments_message(&rows, total);
        if shown < rows.len() {
            debug!("Payment list cut to {} of {} rows to fit one message", shown, rows.len());
        }

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(payments_keyboard(&rows[..shown]))
            .await?;

        Ok(())
    }

    async fn display_no_payments(&self) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "Back to Menu",
            Destination::Back.to_callback_data(),
        )]]);

        self.bot
            .send_message(self.chat_id, "No payments yet.")
            .reply_markup(keyboard)
            .await?;

        Ok(())
    }

    async fn display_payment_details(&self, row: PaymentRowView, payment: PaymentRecord) -> Result<()> {
        let mut text = format!(
            "<b>Payment details</b>\n\n{}\n\n\
            Direction: <b>{}</b>\n\
            Status: <b>{}</b>\n\
            Payment hash: <code>{}</code>",
            render_row(&row),
            payment.direction,
            payment.status,
            shorten_identifier(&payment.payment_hash.to_string())
        );
        if let Some(id) = payment.id {
            text.push_str(&format!("\nId: <code>{}</code>", id));
        }
        if let Some(completed_at) = payment.completed_at {
            text.push_str(&format!(
                "\nCompleted: {} UTC",
                completed_at.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "Back to Payments",
            Destination::Payments.to_callback_data(),
        )]]);

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;

        Ok(())
    }

    async fn display_payment_not_found(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "This payment is no longer in the wallet history.")
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error: {}", error_message))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Direction, NavigationKey, PaymentIdentifier, RowDescription};

    fn row() -> PaymentRowView {
        PaymentRowView {
            amount_text: Some("+1,200".to_string()),
            amount_color: Some(AmountColor::Positive),
            unit_text: Some("sat".to_string()),
            description: RowDescription {
                text: "fish & chips".to_string(),
                is_placeholder: false,
            },
            description_color: DescriptionColor::Normal,
            avatar_style: AvatarStyle::Success,
            timestamp_text: Some("5 minutes ago".to_string()),
            navigation_key: NavigationKey {
                direction: Direction::Incoming,
                identifier: PaymentIdentifier::Hash(
                    "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
                        .parse()
                        .unwrap(),
                ),
            },
        }
    }

    #[test]
    fn renders_settled_row() {
        assert_eq!(
            render_row(&row()),
            "✅ <b>+1,200 sat</b> · fish &amp; chips\n<i>5 minutes ago</i>"
        );
    }

    #[test]
    fn renders_pending_row_without_amount() {
        let mut row = row();
        row.amount_text = None;
        row.amount_color = None;
        row.unit_text = None;
        row.avatar_style = AvatarStyle::Pending;
        row.description = RowDescription {
            text: "no description".to_string(),
            is_placeholder: true,
        };
        row.description_color = DescriptionColor::Muted;
        row.timestamp_text = Some("processing".to_string());

        assert_eq!(
            render_row(&row),
            "⏳ <i>no description</i>\n<i>processing</i>"
        );
    }

    #[test]
    fn keyboard_routes_rows_to_details() {
        let rows = vec![row()];
        let keyboard = payments_keyboard(&rows);

        // one row button plus the refresh/settings and back rows
        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "✅ +1,200 sat");
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut row = row();
        row.description.text = "x".repeat(639);

        let rendered = render_row(&row);
        assert!(rendered.contains(&format!("{}…", "x".repeat(MAX_DESCRIPTION_CHARS - 1))));
        assert!(!rendered.contains(&"x".repeat(MAX_DESCRIPTION_CHARS)));
    }

    #[test]
    fn list_of_long_descriptions_fits_one_message() {
        let rows: Vec<PaymentRowView> = (0..20)
            .map(|_| {
                let mut row = row();
                row.description.text = "x".repeat(639);
                row
            })
            .collect();

        let (text, shown) = payments_message(&rows, 20);

        assert_eq!(shown, 20);
        assert!(message_len(&text) <= MAX_MESSAGE_LEN);
    }

    #[test]
    fn list_stops_before_message_limit() {
        // every "&" is escaped to "&amp;", so each row renders far longer than its text
        let rows: Vec<PaymentRowView> = (0..20)
            .map(|_| {
                let mut row = row();
                row.description.text = "&".repeat(639);
                row
            })
            .collect();

        let (text, shown) = payments_message(&rows, 25);

        assert!(shown > 0 && shown < 20);
        assert!(message_len(&text) <= MAX_MESSAGE_LEN);
        assert!(text.ends_with(&format!("<i>Showing {} of 25 payments</i>", shown)));
        assert_eq!(payments_keyboard(&rows[..shown]).inline_keyboard.len(), shown + 2);
    }
}
