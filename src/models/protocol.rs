//! Terminal protocol and payout network models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Full display names of the protocols that settle as a crypto payout
/// instead of a direct card settlement.
pub const OFF_LEDGER_PROTOCOLS: [&str; 3] = [
    "POS Terminal -101.8 (PIN-LESS transaction)",
    "POS Terminal -201.3 (6-digit approval)",
    "POS Terminal -201.5 (6-digit approval)",
];

/// Terminal protocol selected for a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    #[default]
    P101_1,
    P101_4,
    P101_6,
    P101_7,
    P101_8,
    P201_1,
    P201_3,
    P201_5,
}

impl Protocol {
    pub const ALL: [Protocol; 8] = [
        Protocol::P101_1,
        Protocol::P101_4,
        Protocol::P101_6,
        Protocol::P101_7,
        Protocol::P101_8,
        Protocol::P201_1,
        Protocol::P201_3,
        Protocol::P201_5,
    ];

    /// Short identifier, e.g. `101.1`
    pub fn id(&self) -> &'static str {
        match self {
            Protocol::P101_1 => "101.1",
            Protocol::P101_4 => "101.4",
            Protocol::P101_6 => "101.6",
            Protocol::P101_7 => "101.7",
            Protocol::P101_8 => "101.8",
            Protocol::P201_1 => "201.1",
            Protocol::P201_3 => "201.3",
            Protocol::P201_5 => "201.5",
        }
    }

    /// Name shown to the operator and sent to the backend
    pub fn display_name(&self) -> &'static str {
        match self {
            Protocol::P101_1 => "POS Terminal -101.1 (4-digit approval)",
            Protocol::P101_4 => "POS Terminal -101.4 (6-digit approval)",
            Protocol::P101_6 => "POS Terminal -101.6 (6-digit approval)",
            Protocol::P101_7 => "POS Terminal -101.7 (4-digit approval)",
            Protocol::P101_8 => "POS Terminal -101.8 (PIN-LESS transaction)",
            Protocol::P201_1 => "POS Terminal -201.1 (6-digit approval)",
            Protocol::P201_3 => "POS Terminal -201.3 (6-digit approval)",
            Protocol::P201_5 => "POS Terminal -201.5 (6-digit approval)",
        }
    }

    /// Number of digits the auth code must have for this protocol
    pub fn auth_code_length(&self) -> usize {
        match self {
            Protocol::P101_1 | Protocol::P101_7 | Protocol::P101_8 => 4,
            Protocol::P101_4
            | Protocol::P101_6
            | Protocol::P201_1
            | Protocol::P201_3
            | Protocol::P201_5 => 6,
        }
    }

    pub fn is_off_ledger(&self) -> bool {
        is_off_ledger_name(self.display_name())
    }
}

/// Check a protocol display name against the off-ledger set
pub fn is_off_ledger_name(display_name: &str) -> bool {
    OFF_LEDGER_PROTOCOLS.contains(&display_name)
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Protocol {
    type Err = String;

    /// Accepts either the short id (`201.3`) or the full display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Protocol::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s || p.display_name() == s)
            .ok_or_else(|| format!("Unknown protocol: {}", s))
    }
}

/// Network used for USDT payouts on off-ledger protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Erc20,
    Trc20,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Erc20 => "ERC-20",
            Network::Trc20 => "TRC-20",
        }
    }

    /// Merchant wallet filled in when the network is selected
    pub fn default_wallet(&self) -> &'static str {
        match self {
            Network::Erc20 => "0x06674B3fa1d1d6e5813cDC18d4091D499084Bdd8",
            Network::Trc20 => "TKMpfYsTRWJ8W4QUUiUc6XT8cJ8UWkzSLT",
        }
    }

    /// Payout label sent with off-ledger requests
    pub fn payout_type(&self) -> String {
        format!("USDT-{}", self.as_str())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERC-20" | "ERC20" => Ok(Network::Erc20),
            "TRC-20" | "TRC20" => Ok(Network::Trc20),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Sale currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}
