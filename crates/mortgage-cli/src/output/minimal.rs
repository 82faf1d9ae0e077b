use serde_json::Value;

use super::{display_money, is_money_key};

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority, then
/// fall back to the first field in the result object. Money prints grouped
/// to two fraction digits.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "total_repaid", "principal"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(key, val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(key, val));
            return;
        }
    }

    println!("{}", format_minimal("", result_obj));
}

fn format_minimal(key: &str, value: &Value) -> String {
    if is_money_key(key) {
        if let Value::String(raw) = value {
            if let Some(money) = display_money(raw) {
                return money;
            }
        }
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
