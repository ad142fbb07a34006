/*
[INPUT]:  Human decimal amount strings and base-unit integer strings
[OUTPUT]: Exact conversions between the two representations
[POS]:    Data layer - native-token denomination
[UPDATE]: When denomination rules or display formatting change
*/

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::http::{MarketError, Result};

/// Convert a human decimal amount into a base-unit integer string, scaled by
/// `decimals`. The scaling is done on the string form so the value is exact;
/// rust_decimal only validates the input shape and sign.
pub fn parse_amount(human: &str, decimals: u32) -> Result<String> {
    let trimmed = human.trim();
    let parsed = Decimal::from_str(trimmed)
        .map_err(|_| MarketError::Config {
            message: format!("invalid amount: {human:?}"),
        })?;
    if parsed.is_sign_negative() {
        return Err(MarketError::Config {
            message: format!("amount must not be negative: {human:?}"),
        });
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };
    if int_part.bytes().any(|b| !b.is_ascii_digit())
        || frac_part.bytes().any(|b| !b.is_ascii_digit())
    {
        return Err(MarketError::Config {
            message: format!("invalid amount: {human:?}"),
        });
    }

    let max_frac = decimals as usize;
    if frac_part.len() > max_frac && frac_part[max_frac..].bytes().any(|b| b != b'0') {
        return Err(MarketError::Config {
            message: format!("amount has more than {decimals} decimal places: {human:?}"),
        });
    }

    let kept = &frac_part[..frac_part.len().min(max_frac)];
    let mut units = String::with_capacity(int_part.len() + max_frac);
    units.push_str(int_part);
    units.push_str(kept);
    for _ in 0..max_frac - kept.len() {
        units.push('0');
    }

    let units = units.trim_start_matches('0');
    Ok(if units.is_empty() {
        "0".to_string()
    } else {
        units.to_string()
    })
}

/// Render a base-unit integer string as a human decimal with a fixed number
/// of fractional digits. Malformed input renders as zero; this is a display
/// helper, not a validator.
pub fn format_amount(base_units: &str, decimals: u32, digits: u32) -> String {
    let trimmed = base_units.trim();
    let units = if trimmed.is_empty() || trimmed.bytes().any(|b| !b.is_ascii_digit()) {
        "0"
    } else {
        trimmed
    };

    let decimals = decimals as usize;
    let padded = if units.len() <= decimals {
        format!("{units:0>width$}", width = decimals + 1)
    } else {
        units.to_string()
    };
    let split = padded.len() - decimals;
    let int_part = padded[..split].trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    let digits = digits as usize;
    if digits == 0 {
        return int_part.to_string();
    }

    let frac_part = &padded[split..];
    let mut shown = frac_part[..digits.min(frac_part.len())].to_string();
    while shown.len() < digits {
        shown.push('0');
    }
    format!("{int_part}.{shown}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_whole_and_fractional_amounts() {
        assert_eq!(parse_amount("1", 18).unwrap(), "1000000000000000000");
        assert_eq!(parse_amount("0.5", 18).unwrap(), "500000000000000000");
        assert_eq!(parse_amount("2.25", 18).unwrap(), "2250000000000000000");
        assert_eq!(parse_amount("0.000000000000000001", 18).unwrap(), "1");
    }

    #[test]
    fn zero_and_trailing_zeros_normalize() {
        assert_eq!(parse_amount("0", 18).unwrap(), "0");
        assert_eq!(parse_amount("0.0000", 18).unwrap(), "0");
        assert_eq!(parse_amount("1.500000", 18).unwrap(), "1500000000000000000");
    }

    #[test]
    fn rejects_malformed_and_negative_input() {
        assert!(parse_amount("", 18).is_err());
        assert!(parse_amount("abc", 18).is_err());
        assert!(parse_amount("-1", 18).is_err());
        assert!(parse_amount("1.2.3", 18).is_err());
    }

    #[test]
    fn rejects_excess_precision_but_allows_trailing_zeros() {
        assert!(parse_amount("0.0000000000000000001", 18).is_err());
        assert_eq!(
            parse_amount("0.1000000000000000000", 18).unwrap(),
            "100000000000000000"
        );
    }

    #[test]
    fn formats_base_units_for_display() {
        assert_eq!(format_amount("1000000000000000000", 18, 4), "1.0000");
        assert_eq!(format_amount("10000000000000000", 18, 4), "0.0100");
        assert_eq!(format_amount("0", 18, 4), "0.0000");
        assert_eq!(format_amount("1500000000000000000", 18, 2), "1.50");
        assert_eq!(format_amount("not-a-number", 18, 4), "0.0000");
    }

    #[test]
    fn format_with_zero_digits_drops_the_point() {
        assert_eq!(format_amount("2000000000000000000", 18, 0), "2");
    }
}
