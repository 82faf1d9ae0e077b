//! Free-text amount normalization.
//!
//! Converts whatever a user typed into the amount field ("1,234.56",
//! " 250 000 ") into a usable principal, flagging text that a currency
//! amount can never contain. Parsed values are `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Outcome of normalizing a free-text amount.
///
/// `invalid` is raised only when the text contains characters outside digits,
/// `.` and `,`. Text built from legal characters that still holds no usable
/// number (empty, separators only, a comma after the decimal point) yields
/// `principal: None` with `invalid: false` — the field is merely absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAmount {
    pub principal: Option<Money>,
    pub invalid: bool,
}

impl NormalizedAmount {
    /// True when a principal was produced.
    pub fn is_usable(&self) -> bool {
        self.principal.is_some()
    }
}

/// Normalize a raw amount string into a principal.
///
/// - All whitespace is stripped, wherever it appears.
/// - Any character other than an ASCII digit, `.` or `,` raises the invalid
///   flag and produces no principal.
/// - Commas are thousands separators and are discarded; a single `.`
///   separates the fractional part. More than one `.` is undefined input and
///   is rejected rather than guessed at.
///
/// Never panics and never returns an error type: the only failure signals
/// are the flag and the absent principal.
pub fn normalize_amount(text: &str) -> NormalizedAmount {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped
        .chars()
        .any(|c| !c.is_ascii_digit() && c != '.' && c != ',')
    {
        return NormalizedAmount {
            principal: None,
            invalid: true,
        };
    }

    if stripped.matches('.').count() > 1 {
        return NormalizedAmount {
            principal: None,
            invalid: true,
        };
    }

    let principal = match stripped.split_once('.') {
        Some((integer_raw, fraction)) => {
            // Everything before the dot is the integer part; commas in it
            // are separators and dropped. The fractional part must parse as
            // written — "1.2,3" holds no usable number.
            let integer: String = integer_raw
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if fraction.is_empty() {
                parse_money(&integer)
            } else if integer.is_empty() {
                parse_money(&format!("0.{fraction}"))
            } else {
                parse_money(&format!("{integer}.{fraction}"))
            }
        }
        None => {
            let digits: String = stripped.chars().filter(|c| c.is_ascii_digit()).collect();
            parse_money(&digits)
        }
    };

    NormalizedAmount {
        principal,
        invalid: false,
    }
}

/// Parse a cleaned candidate; anything unparsable is "no principal".
fn parse_money(candidate: &str) -> Option<Money> {
    if candidate.is_empty() {
        return None;
    }
    candidate.parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn usable(text: &str) -> NormalizedAmount {
        NormalizedAmount {
            principal: Some(text.parse::<Decimal>().unwrap()),
            invalid: false,
        }
    }

    const ABSENT: NormalizedAmount = NormalizedAmount {
        principal: None,
        invalid: false,
    };

    const INVALID: NormalizedAmount = NormalizedAmount {
        principal: None,
        invalid: true,
    };

    #[test]
    fn test_plain_decimal() {
        assert_eq!(normalize_amount("1234.56"), usable("1234.56"));
    }

    #[test]
    fn test_thousands_separator_before_decimal_point() {
        assert_eq!(normalize_amount("1,234.56"), usable("1234.56"));
    }

    #[test]
    fn test_single_dot_is_the_decimal_point() {
        // "1.234" is one point two three four, not one thousand two
        // hundred and thirty four.
        assert_eq!(normalize_amount("1.234"), usable("1.234"));
    }

    #[test]
    fn test_separators_without_decimal_point_stripped() {
        assert_eq!(normalize_amount("250,000"), usable("250000"));
        assert_eq!(normalize_amount("1,000,000"), usable("1000000"));
    }

    #[test]
    fn test_letters_raise_invalid_flag() {
        assert_eq!(normalize_amount("12a3"), INVALID);
    }

    #[test]
    fn test_currency_symbols_raise_invalid_flag() {
        assert_eq!(normalize_amount("£100"), INVALID);
        assert_eq!(normalize_amount("$1,000"), INVALID);
        assert_eq!(normalize_amount("-100"), INVALID);
    }

    #[test]
    fn test_whitespace_stripped_everywhere() {
        assert_eq!(normalize_amount("  100  "), usable("100"));
        assert_eq!(normalize_amount(" 1 000 "), usable("1000"));
        assert_eq!(normalize_amount("\t1234.56\n"), usable("1234.56"));
    }

    #[test]
    fn test_multiple_dots_rejected() {
        assert_eq!(normalize_amount("1.2.3"), INVALID);
        assert_eq!(normalize_amount("1.234.567"), INVALID);
    }

    #[test]
    fn test_comma_in_fraction_unusable_but_not_invalid() {
        assert_eq!(normalize_amount("1.2,3"), ABSENT);
        assert_eq!(normalize_amount("1.234,56"), ABSENT);
    }

    #[test]
    fn test_empty_and_separator_only_input_absent() {
        assert_eq!(normalize_amount(""), ABSENT);
        assert_eq!(normalize_amount("   "), ABSENT);
        assert_eq!(normalize_amount(",,"), ABSENT);
        assert_eq!(normalize_amount("."), ABSENT);
    }

    #[test]
    fn test_leading_dot_means_zero_integer_part() {
        assert_eq!(normalize_amount(".5"), usable("0.5"));
    }

    #[test]
    fn test_trailing_dot_falls_back_to_integer_part() {
        assert_eq!(normalize_amount("100."), usable("100"));
        assert_eq!(normalize_amount("1,000."), usable("1000"));
    }

    #[test]
    fn test_zero_parses_as_zero() {
        // Positivity is the form's concern, not the normalizer's.
        assert_eq!(normalize_amount("0"), usable("0"));
        assert_eq!(normalize_amount("0.00"), usable("0.00"));
    }

    #[test]
    fn test_is_usable_tracks_principal_presence() {
        assert!(normalize_amount("100").is_usable());
        assert!(!normalize_amount("").is_usable());
        assert!(!normalize_amount("12a3").is_usable());
    }

    #[test]
    fn test_digits_beyond_decimal_capacity_unusable() {
        let long = "9".repeat(40);
        assert_eq!(normalize_amount(&long), ABSENT);
    }

    #[test]
    fn test_typical_deposit_sized_amount() {
        assert_eq!(normalize_amount("300,000"), usable("300000"));
        assert_eq!(normalize_amount("300000").principal, Some(dec!(300000)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let normalized = normalize_amount("1,234.56");
        let json = serde_json::to_string(&normalized).unwrap();
        let deserialized: NormalizedAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, normalized);
        assert_eq!(deserialized.principal, Some(dec!(1234.56)));
    }
}
