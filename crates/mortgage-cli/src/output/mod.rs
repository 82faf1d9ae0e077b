pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Result fields that hold money, regrouped for the human-readable formats.
const MONEY_KEYS: &[&str] = &["monthly_payment", "total_repaid", "total_interest", "principal"];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// True when a result field holds money.
pub(crate) fn is_money_key(key: &str) -> bool {
    MONEY_KEYS.contains(&key)
}

/// Render a raw decimal string as money: two fraction digits, rounded half
/// away from zero, thousands grouped. `None` when the text is no decimal.
pub(crate) fn display_money(raw: &str) -> Option<String> {
    let amount = Decimal::from_str(raw).ok()?;
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Some(group_thousands(&format!("{rounded:.2}")))
}

fn group_thousands(formatted: &str) -> String {
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (formatted, ""),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}
