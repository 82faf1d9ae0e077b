use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amount normalization
// ---------------------------------------------------------------------------

#[napi]
pub fn normalize_amount(text: String) -> NapiResult<String> {
    let output = mortgage_core::normalize::normalize_amount(&text);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Repayment quoting
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_repayment(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::repayment::RepaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::repayment::calculate_repayment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
