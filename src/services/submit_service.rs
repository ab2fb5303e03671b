//! Transaction submission and response interpretation

use tracing::{error, info, warn};

use crate::api::backend::{ApiError, PaymentBackend, PaymentResponse};
use crate::models::{DisplayColor, TransactionRequest, TransactionResult, TransactionStatus};
use crate::utils::format::{char_prefix, char_slice};

pub const NETWORK_ERROR: &str = "Network Error";
pub const TRANSACTION_FAILED: &str = "Transaction Failed";

/// Status line shown while the request is in flight
pub fn processing_message(request: &TransactionRequest) -> String {
    format!("Processing {} request...", request.request_type)
}

/// Send the request and turn whatever comes back into a displayable result
///
/// Never fails: rejections and transport errors become `Rejected` results.
pub async fn submit<B>(backend: &B, request: &TransactionRequest) -> TransactionResult
where
    B: PaymentBackend + ?Sized,
{
    info!(
        "Submitting {} for {:.2} {} ({})",
        request.request_type, request.amount, request.currency, request.protocol
    );

    let outcome = backend.process_payment(request).await;
    interpret(request, outcome)
}

/// Map a backend outcome onto a `TransactionResult`
pub fn interpret(
    request: &TransactionRequest,
    outcome: Result<PaymentResponse, ApiError>,
) -> TransactionResult {
    match outcome {
        Ok(response) => {
            let Some(details) = success_details(&response) else {
                error!("Confirmation carried neither tx_hash nor transaction_id");
                return result(
                    request,
                    TransactionStatus::Rejected,
                    DisplayColor::Red,
                    NETWORK_ERROR.to_string(),
                );
            };
            let color = if non_empty(&response.payout_type).is_some() {
                DisplayColor::Orange
            } else {
                DisplayColor::Green
            };
            info!("Transaction confirmed: {}", details);
            result(request, TransactionStatus::ConfirmedSuccess, color, details)
        }
        Err(ApiError::Rejected { status, message }) => {
            warn!("Transaction rejected with status {}", status);
            let details = message.unwrap_or_else(|| TRANSACTION_FAILED.to_string());
            result(request, TransactionStatus::Rejected, DisplayColor::Red, details)
        }
        Err(e) => {
            error!("API call failed: {}", e);
            result(
                request,
                TransactionStatus::Rejected,
                DisplayColor::Red,
                NETWORK_ERROR.to_string(),
            )
        }
    }
}

/// `Hash: <first 10>...` when a tx hash is present, otherwise the auth code
/// embedded at characters 4..10 of the transaction id
///
/// `None` when the confirmation carries neither.
pub fn success_details(response: &PaymentResponse) -> Option<String> {
    if let Some(hash) = non_empty(&response.tx_hash) {
        Some(format!("Hash: {}...", char_prefix(hash, 10)))
    } else {
        response
            .transaction_id
            .as_deref()
            .map(|id| format!("Auth Code: {}", char_slice(id, 4, 10)))
    }
}

/// Empty strings from the backend count as absent
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn result(
    request: &TransactionRequest,
    status: TransactionStatus,
    color: DisplayColor,
    details: String,
) -> TransactionResult {
    TransactionResult {
        status,
        amount: request.amount,
        currency: request.currency,
        protocol: request.protocol.clone(),
        details,
        color,
    }
}
