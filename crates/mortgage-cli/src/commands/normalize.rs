use clap::Args;
use serde_json::Value;

use mortgage_core::normalize::normalize_amount;

/// Arguments for amount normalization
#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw amount text, exactly as a user might type it
    pub text: String,
}

pub fn run_normalize(args: NormalizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let normalized = normalize_amount(&args.text);
    Ok(serde_json::to_value(normalized)?)
}
