use crate::models::FormFields;
use crate::utils::ValidationError;

/// Check the form before anything is sent to the backend
///
/// Empty fields are reported before a wrong auth-code length.
pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    let required = [
        &fields.card_number,
        &fields.expiry,
        &fields.cvv,
        &fields.amount,
        &fields.auth_code,
        &fields.merchant_wallet,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    let expected = fields.protocol.auth_code_length();
    let actual = fields.auth_code.chars().count();
    if actual != expected {
        return Err(ValidationError::AuthCodeLengthMismatch { expected, actual });
    }

    if fields.parsed_amount().is_none() {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(())
}
