pub mod auth_service;
pub mod history_service;
pub mod receipt_service;
pub mod request_service;
pub mod session;
pub mod submit_service;
pub mod validation_service;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_service::{Authenticator, ConfigAuthenticator};
pub use history_service::HistoryStore;
pub use receipt_service::{Printer, Receipt, StdoutPrinter};
pub use session::Session;
