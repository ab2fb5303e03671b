use chrono::{DateTime, Local};
use std::io::Write;

use crate::models::HistoryEntry;

/// Printable record of the last successful transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub status: String,
    pub protocol: String,
    pub amount: String,
    pub timestamp: DateTime<Local>,
    pub details: String,
}

impl Receipt {
    pub fn from_entry(entry: &HistoryEntry, timestamp: DateTime<Local>) -> Self {
        Self {
            status: entry.status.clone(),
            protocol: entry.protocol.clone(),
            amount: entry.display_amount(),
            timestamp,
            details: entry.details.clone(),
        }
    }

    pub fn render(&self) -> String {
        let rule = "-".repeat(40);
        format!(
            "{:^40}\n{}\nStatus: {}\nProtocol: {}\nAmount: {}\nTimestamp: {}\nDetails: {}\n",
            "Transaction Receipt",
            rule,
            self.status,
            self.protocol,
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.details,
        )
    }
}

/// Where rendered receipts go
pub trait Printer {
    fn print(&mut self, document: &str) -> std::io::Result<()>;
}

/// Printer writing receipts to stdout
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, document: &str) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(document.as_bytes())?;
        out.flush()
    }
}
