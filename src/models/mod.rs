//! Data models for the POS terminal
//!
//! Form input, the request sent to the payment backend, the result shown on the
//! display and the entries kept in the session history.

pub mod form;
pub mod history;
pub mod protocol;
pub mod transaction;

pub use form::FormFields;
pub use history::{HistoryEntry, HistoryPanel};
pub use protocol::{Currency, Network, Protocol, OFF_LEDGER_PROTOCOLS};
pub use transaction::{
    format_amount, DisplayColor, RequestType, TransactionRequest, TransactionResult,
    TransactionStatus,
};
