//! Payment form state

use super::protocol::{Currency, Network, Protocol};

/// Raw values of the terminal's payment form
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub amount: String,
    pub currency: Currency,
    pub auth_code: String,
    pub protocol: Protocol,
    pub network: Network,
    pub merchant_wallet: String,
}

impl Default for FormFields {
    fn default() -> Self {
        let network = Network::default();
        Self {
            card_number: String::new(),
            expiry: String::new(),
            cvv: String::new(),
            amount: String::new(),
            currency: Currency::default(),
            auth_code: String::new(),
            protocol: Protocol::default(),
            network,
            merchant_wallet: network.default_wallet().to_string(),
        }
    }
}

impl FormFields {
    /// Amount as typed, parsed the way the display parses it
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok().filter(|a| a.is_finite())
    }
}
