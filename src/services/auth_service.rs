use async_trait::async_trait;

use crate::config::Config;
use crate::utils::PosError;

/// Checks operator credentials before a session starts
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, PosError>;
}

/// Operator credentials supplied through configuration
///
/// Without configured credentials every login is refused.
pub struct ConfigAuthenticator {
    username: Option<String>,
    password: Option<String>,
}

impl ConfigAuthenticator {
    pub fn new(config: &Config) -> Self {
        Self {
            username: config.operator_username.clone(),
            password: config.operator_password.clone(),
        }
    }
}

#[async_trait]
impl Authenticator for ConfigAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, PosError> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Ok(u == username && p == password),
            _ => Err(PosError::Auth("operator credentials are not configured".to_string())),
        }
    }
}
