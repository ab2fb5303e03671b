use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Response from `POST /api/v1/payments/process`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub payout_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One record of `GET /api/v1/history`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

/// The backend reports amounts either as JSON numbers or numeric strings
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("amount out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount: {}", s))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("invalid amount: {}", other))),
    }
}

/// Errors talking to the payment backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response, with the backend's message when it sent one
    #[error("Rejected by backend ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed
    #[error("Request Error: {0}")]
    RequestError(String),
    /// 2xx response whose body could not be decoded
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::RequestError(_))
    }
}
