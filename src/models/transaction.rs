//! Transaction request and result models

use serde::Serialize;
use std::fmt;

use super::protocol::Currency;

/// Body of `POST /api/v1/payments/process`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRequest {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub amount: f64,
    pub currency: Currency,
    pub auth_code: String,
    /// Full protocol display name
    pub protocol: String,
    /// `USDT-<network>` for off-ledger protocols, null otherwise
    pub payout_type: Option<String>,
    pub merchant_wallet: String,
    pub is_test: bool,
    /// Label for the processing message, never sent
    #[serde(skip)]
    pub request_type: RequestType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestType {
    #[default]
    OnlineSale,
    OfflineSale,
}

impl RequestType {
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::OnlineSale => "Online Sale",
            RequestType::OfflineSale => "Offline Sale",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    ConfirmedSuccess,
    Rejected,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::ConfirmedSuccess => "Confirmed Success",
            TransactionStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one submission, derived from the backend response
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    pub status: TransactionStatus,
    pub amount: f64,
    pub currency: Currency,
    pub protocol: String,
    pub details: String,
    /// Orange for off-ledger payouts, green for card settlement, red on rejection
    pub color: DisplayColor,
}

impl TransactionResult {
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::ConfirmedSuccess
    }
}

/// Color tag understood by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayColor {
    #[default]
    Gray,
    Green,
    Red,
    Blue,
    Orange,
}

impl DisplayColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayColor::Gray => "gray",
            DisplayColor::Green => "green",
            DisplayColor::Red => "red",
            DisplayColor::Blue => "blue",
            DisplayColor::Orange => "orange",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{currency} {amount:.2}` as shown on the terminal and receipt
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}
