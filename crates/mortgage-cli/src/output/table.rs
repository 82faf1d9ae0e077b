use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{display_money, is_money_key};

/// Format output as a table using the tabled crate.
///
/// Money fields are regrouped to two fraction digits; everything else
/// prints as the calculator produced it.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(result_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in result_map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(text) = warning {
                    println!("  - {}", text);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

/// Money fields get currency-style formatting; the rest print raw.
fn format_field(key: &str, value: &Value) -> String {
    if is_money_key(key) {
        if let Value::String(raw) = value {
            if let Some(money) = display_money(raw) {
                return money;
            }
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
