//! Terminal configuration loaded from the environment (`.env` supported)

use crate::utils::ConfigError;

const DEFAULT_BACKEND_URL: &str = "https://benz-wyw5.onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the payment backend
    pub backend_url: String,
    /// Sent as `is_test` with every payment request
    pub test_mode: bool,
    pub operator_username: Option<String>,
    pub operator_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            test_mode: true,
            operator_username: None,
            operator_password: None,
        }
    }
}

impl Config {
    /// Read `POS_BACKEND_URL`, `POS_TEST_MODE`, `POS_OPERATOR_USERNAME` and
    /// `POS_OPERATOR_PASSWORD`, falling back to defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let backend_url = lookup("POS_BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.backend_url);

        let test_mode = match lookup("POS_TEST_MODE") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                name: "POS_TEST_MODE",
                value,
            })?,
            None => defaults.test_mode,
        };

        Ok(Self {
            backend_url,
            test_mode,
            operator_username: lookup("POS_OPERATOR_USERNAME").filter(|v| !v.is_empty()),
            operator_password: lookup("POS_OPERATOR_PASSWORD").filter(|v| !v.is_empty()),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
