pub mod errors;
pub mod format;
pub mod table;

pub use errors::{ConfigError, PosError, ValidationError};
pub use format::{format_card_number, format_expiry};
pub use table::Table;
