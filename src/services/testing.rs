//! In-memory collaborators for service tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::backend::{ApiError, HistoryRecord, PaymentBackend, PaymentResponse};
use crate::display::{DisplayState, Renderer};
use crate::models::{HistoryPanel, TransactionRequest};

/// Backend returning canned outcomes and recording what it was sent
pub struct FakeBackend {
    payment: Result<PaymentResponse, ApiError>,
    history: Result<Vec<HistoryRecord>, ApiError>,
    requests: Mutex<Vec<TransactionRequest>>,
    history_calls: Mutex<usize>,
}

impl FakeBackend {
    pub fn new(payment: Result<PaymentResponse, ApiError>) -> Self {
        Self {
            payment,
            history: Ok(Vec::new()),
            requests: Mutex::new(Vec::new()),
            history_calls: Mutex::new(0),
        }
    }

    pub fn approving(transaction_id: &str) -> Self {
        Self::new(Ok(PaymentResponse {
            status: Some("approved".to_string()),
            transaction_id: Some(transaction_id.to_string()),
            ..Default::default()
        }))
    }

    pub fn unreachable() -> Self {
        Self::new(Err(ApiError::RequestError("connection refused".to_string())))
            .with_history(Err(ApiError::RequestError("connection refused".to_string())))
    }

    pub fn with_history(mut self, history: Result<Vec<HistoryRecord>, ApiError>) -> Self {
        self.history = history;
        self
    }

    pub fn payment_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn history_calls(&self) -> usize {
        *self.history_calls.lock().unwrap()
    }

    pub fn last_request(&self) -> Option<TransactionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PaymentBackend for FakeBackend {
    async fn process_payment(
        &self,
        request: &TransactionRequest,
    ) -> Result<PaymentResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.payment.clone()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        *self.history_calls.lock().unwrap() += 1;
        self.history.clone()
    }
}

/// Renderer that keeps everything it was asked to show
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub states: Vec<DisplayState>,
    pub processing: Vec<bool>,
    pub receipt_available: Option<bool>,
    pub panels: Vec<HistoryPanel>,
}

impl RecordingRenderer {
    pub fn last_state(&self) -> Option<&DisplayState> {
        self.states.last()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.last().copied().unwrap_or(false)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, state: &DisplayState) {
        self.states.push(state.clone());
    }

    fn set_processing(&mut self, active: bool) {
        self.processing.push(active);
    }

    fn set_receipt_available(&mut self, available: bool) {
        self.receipt_available = Some(available);
    }

    fn render_history(&mut self, panel: &HistoryPanel) {
        self.panels.push(panel.clone());
    }
}
