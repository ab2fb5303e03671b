//! Session transaction history

use tracing::{debug, warn};

use crate::api::backend::{ApiError, HistoryRecord, PaymentBackend};
use crate::models::{HistoryEntry, HistoryPanel, TransactionResult};
use crate::utils::format::char_prefix;
use crate::utils::Table;

/// Completed transactions of the current session
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the list with the backend's snapshot
    ///
    /// On failure the current list is kept and the error returned for display.
    pub async fn fetch_all<B>(&mut self, backend: &B) -> Result<&[HistoryEntry], ApiError>
    where
        B: PaymentBackend + ?Sized,
    {
        match backend.fetch_history().await {
            Ok(records) => {
                debug!("Fetched {} history records", records.len());
                self.entries = records
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| entry_from_record(i + 1, record))
                    .collect();
                Ok(&self.entries)
            }
            Err(e) => {
                warn!("Error fetching history: {}", e);
                Err(e)
            }
        }
    }

    /// Record a successful transaction; its id is the list length after insertion
    pub fn append(&mut self, result: &TransactionResult) -> HistoryEntry {
        let entry = HistoryEntry {
            id: self.entries.len() + 1,
            status: result.status.label().to_string(),
            amount: result.amount,
            currency: result.currency.code().to_string(),
            protocol: result.protocol.clone(),
            details: result.details.clone(),
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn entry_from_record(id: usize, record: HistoryRecord) -> HistoryEntry {
    let details = if let Some(hash) = non_empty(record.tx_hash) {
        format!("Hash: {}...", char_prefix(&hash, 10))
    } else if let Some(tx_id) = non_empty(record.transaction_id) {
        format!("Auth Code: {}", tx_id)
    } else {
        "No details".to_string()
    };

    HistoryEntry {
        id,
        status: non_empty(record.status).unwrap_or_else(|| "unknown".to_string()),
        amount: record.amount,
        currency: non_empty(record.currency).unwrap_or_else(|| "USD".to_string()),
        protocol: non_empty(record.protocol).unwrap_or_else(|| "N/A".to_string()),
        details,
    }
}

/// Empty strings from the backend count as absent
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Panel message for a failed fetch
pub fn failure_message(err: &ApiError) -> &'static str {
    if err.is_network() {
        "Network error. Please try again."
    } else {
        "Failed to load history."
    }
}

/// Text form of the history panel
pub fn render_panel(panel: &HistoryPanel) -> String {
    match panel {
        HistoryPanel::Loading => "Loading history...".to_string(),
        HistoryPanel::Empty => "No history available.".to_string(),
        HistoryPanel::Failed(message) => message.clone(),
        HistoryPanel::Entries(entries) => {
            let mut table = Table::new(&["#", "Status", "Protocol", "Amount", "Details"]);
            for entry in entries {
                let mark = if entry.is_success() { "✔" } else { "✘" };
                table.add_row(vec![
                    entry.id.to_string(),
                    format!("{} {}", mark, entry.status),
                    entry.protocol.clone(),
                    entry.display_amount(),
                    entry.details.clone(),
                ]);
            }
            table.render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, DisplayColor, TransactionStatus};
    use crate::services::testing::FakeBackend;

    fn success(amount: f64) -> TransactionResult {
        TransactionResult {
            status: TransactionStatus::ConfirmedSuccess,
            amount,
            currency: Currency::Usd,
            protocol: "POS Terminal -101.1 (4-digit approval)".to_string(),
            details: "Auth Code: 123456".to_string(),
            color: DisplayColor::Green,
        }
    }

    fn records() -> Vec<HistoryRecord> {
        vec![
            HistoryRecord {
                status: Some("success".to_string()),
                amount: 50.0,
                currency: Some("EUR".to_string()),
                protocol: Some("POS Terminal -201.3 (6-digit approval)".to_string()),
                tx_hash: Some("abcdef1234567890".to_string()),
                transaction_id: None,
            },
            HistoryRecord {
                status: Some("approved".to_string()),
                amount: 5.0,
                transaction_id: Some("APPR123456".to_string()),
                ..Default::default()
            },
            HistoryRecord {
                status: Some("declined".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut store = HistoryStore::new();
        for n in 1..=5 {
            let entry = store.append(&success(n as f64));
            assert_eq!(entry.id, n);
        }
        let ids: Vec<usize> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.entries()[0].status, "Confirmed Success");
    }

    #[tokio::test]
    async fn test_ids_follow_length_after_fetch() {
        let backend = FakeBackend::approving("APPR000001").with_history(Ok(records()));
        let mut store = HistoryStore::new();

        assert_eq!(store.append(&success(1.0)).id, 1);
        store.fetch_all(&backend).await.unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.append(&success(2.0)).id, 4);
        assert_eq!(store.append(&success(3.0)).id, 5);
    }

    #[tokio::test]
    async fn test_fetch_maps_records() {
        let backend = FakeBackend::approving("APPR000001").with_history(Ok(records()));
        let mut store = HistoryStore::new();

        let entries = store.fetch_all(&backend).await.unwrap();

        assert_eq!(entries[0].details, "Hash: abcdef1234...");
        assert_eq!(entries[0].currency, "EUR");
        assert_eq!(entries[1].details, "Auth Code: APPR123456");
        assert_eq!(entries[1].currency, "USD");
        assert_eq!(entries[1].protocol, "N/A");
        assert_eq!(entries[2].details, "No details");
        assert!(entries[0].is_success());
        assert!(!entries[2].is_success());
    }

    #[tokio::test]
    async fn test_blank_fields_use_defaults() {
        let backend = FakeBackend::approving("APPR000001").with_history(Ok(vec![HistoryRecord {
            status: None,
            amount: 1.0,
            currency: Some(String::new()),
            protocol: Some(String::new()),
            tx_hash: Some(String::new()),
            transaction_id: Some(String::new()),
        }]));
        let mut store = HistoryStore::new();

        let entries = store.fetch_all(&backend).await.unwrap();

        assert_eq!(entries[0].status, "unknown");
        assert_eq!(entries[0].currency, "USD");
        assert_eq!(entries[0].protocol, "N/A");
        assert_eq!(entries[0].details, "No details");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_entries() {
        let backend = FakeBackend::unreachable();
        let mut store = HistoryStore::new();
        store.append(&success(9.0));

        let err = store.fetch_all(&backend).await.unwrap_err();

        assert_eq!(failure_message(&err), "Network error. Please try again.");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = HistoryStore::new();
        store.append(&success(1.0));
        store.append(&success(2.0));
        store.clear();
        assert_eq!(store.len(), 0);
        assert_eq!(store.append(&success(3.0)).id, 1);
    }

    #[test]
    fn test_render_panel() {
        assert_eq!(render_panel(&HistoryPanel::Empty), "No history available.");
        assert_eq!(
            failure_message(&ApiError::Rejected { status: 500, message: None }),
            "Failed to load history."
        );

        let mut store = HistoryStore::new();
        store.append(&success(12.5));
        let text = render_panel(&HistoryPanel::from_entries(store.entries()));
        assert!(text.contains("USD 12.50"));
        assert!(text.contains("✔ Confirmed Success"));
    }
}
