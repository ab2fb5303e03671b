//! Transaction history models

use super::transaction::format_amount;

/// One completed transaction kept for the history panel and receipts
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: usize,
    pub status: String,
    pub amount: f64,
    pub currency: String,
    pub protocol: String,
    pub details: String,
}

impl HistoryEntry {
    /// Backend statuses and the local success label all count as success
    pub fn is_success(&self) -> bool {
        matches!(
            self.status.as_str(),
            "success" | "approved" | "Confirmed Success"
        )
    }

    pub fn display_amount(&self) -> String {
        format_amount(&self.currency, self.amount)
    }
}

/// What the history panel currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryPanel {
    Loading,
    Empty,
    Entries(Vec<HistoryEntry>),
    Failed(String),
}

impl HistoryPanel {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            HistoryPanel::Empty
        } else {
            HistoryPanel::Entries(entries.to_vec())
        }
    }
}
