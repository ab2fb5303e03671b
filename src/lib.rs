//! Point-of-sale terminal client
//!
//! Validates and formats card payment input, submits sales to a remote
//! payment-processing backend and keeps the session's transaction history.

pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use services::Session;
