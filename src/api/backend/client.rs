use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse, HistoryRecord, PaymentResponse};
use crate::models::TransactionRequest;

/// Operations the terminal needs from the payment-processing backend
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    /// POST /api/v1/payments/process
    async fn process_payment(
        &self,
        request: &TransactionRequest,
    ) -> Result<PaymentResponse, ApiError>;

    /// GET /api/v1/history
    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ApiError>;
}

/// HTTP client for the payment backend
pub struct BackendClient {
    http_client: HttpClient,
    base_url: String,
}

impl BackendClient {
    const PROCESS_PATH: &'static str = "/api/v1/payments/process";
    const HISTORY_PATH: &'static str = "/api/v1/history";

    /// Create a new backend client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Turn a non-2xx response into `ApiError::Rejected`, keeping the backend's message
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.message)
            .filter(|m| !m.is_empty());

        warn!("Backend returned {}: {}", status_code, body_text);
        ApiError::Rejected {
            status: status_code,
            message,
        }
    }
}

#[async_trait]
impl PaymentBackend for BackendClient {
    async fn process_payment(
        &self,
        request: &TransactionRequest,
    ) -> Result<PaymentResponse, ApiError> {
        let url = self.url(Self::PROCESS_PATH);
        debug!("POST {} ({})", url, request.request_type);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<PaymentResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = self.url(Self::HISTORY_PATH);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<HistoryRecord>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse history: {}", e)))
    }
}
