pub mod client;
pub mod models;

pub use client::{BackendClient, PaymentBackend};
pub use models::{ApiError, HistoryRecord, PaymentResponse};
