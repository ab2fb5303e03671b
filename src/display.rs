//! Terminal display sink
//!
//! The session never draws anything itself; it hands `DisplayState`s and
//! history panels to a `Renderer`.

use crate::models::{format_amount, Currency, DisplayColor, HistoryPanel};
use crate::services::history_service;

/// Everything the terminal screen shows at one moment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub status: Option<String>,
    /// Already formatted, e.g. `USD 12.50`
    pub amount: Option<String>,
    pub color: DisplayColor,
    pub details: Option<String>,
}

impl DisplayState {
    pub fn new(
        status: Option<&str>,
        amount: Option<f64>,
        currency: Currency,
        color: DisplayColor,
        details: Option<&str>,
    ) -> Self {
        Self {
            status: status.map(str::to_string),
            amount: amount.map(|a| format_amount(currency.code(), a)),
            color,
            details: details.map(str::to_string),
        }
    }

    /// Idle screen shown after login and when the form is cleared
    pub fn initial() -> Self {
        Self {
            status: Some("Ready to Process".to_string()),
            amount: Some("$0.00".to_string()),
            color: DisplayColor::Gray,
            details: None,
        }
    }
}

/// Sink for everything the terminal displays
pub trait Renderer {
    fn render(&mut self, state: &DisplayState);

    /// Processing spinner on/off
    fn set_processing(&mut self, active: bool);

    /// Whether the print-receipt control is offered
    fn set_receipt_available(&mut self, available: bool);

    fn render_history(&mut self, panel: &HistoryPanel);
}

/// Renderer that writes the screen to stdout
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, state: &DisplayState) {
        tracing::debug!("Display [{}] {:?}", state.color, state.status);
        println!("┌─ [{}]", state.color);
        if let Some(status) = &state.status {
            println!("│ {}", status);
        }
        if let Some(amount) = &state.amount {
            println!("│ {}", amount);
        }
        if let Some(details) = &state.details {
            println!("│ {}", details);
        }
        println!("└─");
    }

    fn set_processing(&mut self, active: bool) {
        if active {
            println!("… processing");
        }
    }

    fn set_receipt_available(&mut self, available: bool) {
        if available {
            println!("Receipt available: type `print`");
        }
    }

    fn render_history(&mut self, panel: &HistoryPanel) {
        println!("{}", history_service::render_panel(panel));
    }
}
