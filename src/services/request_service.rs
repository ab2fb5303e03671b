use crate::models::protocol::is_off_ledger_name;
use crate::models::{FormFields, RequestType, TransactionRequest};
use crate::utils::ValidationError;

/// Build the payment request for a validated form
///
/// Off-ledger protocols are recognised by their full display name and carry a
/// `USDT-<network>` payout; every other protocol sends a null payout.
pub fn build_request(
    fields: &FormFields,
    is_test: bool,
) -> Result<TransactionRequest, ValidationError> {
    let amount = fields.parsed_amount().ok_or(ValidationError::InvalidAmount)?;
    let protocol = fields.protocol.display_name();

    let is_off_ledger = is_off_ledger_name(protocol);
    let payout_type = is_off_ledger.then(|| fields.network.payout_type());
    let request_type = if is_off_ledger {
        RequestType::OfflineSale
    } else {
        RequestType::OnlineSale
    };

    Ok(TransactionRequest {
        card_number: fields.card_number.clone(),
        expiry: fields.expiry.clone(),
        cvv: fields.cvv.clone(),
        amount,
        currency: fields.currency,
        auth_code: fields.auth_code.clone(),
        protocol: protocol.to_string(),
        payout_type,
        merchant_wallet: fields.merchant_wallet.clone(),
        is_test,
        request_type,
    })
}
