/*
[INPUT]:  Loosely-typed JSON values from the gateway's decoding layer
[OUTPUT]: Strict local types (TaskStatus, strings, integers)
[POS]:    Boundary layer - normalization of externally-decoded contract state
[UPDATE]: When the external decoding layer grows new value shapes
*/

use serde_json::Value;

use crate::types::TaskStatus;

/// Normalize a decoded enum value into `TaskStatus`.
///
/// The decoding layer has represented enumerations differently across
/// versions, so every shape seen in the wild is accepted. Priority order,
/// first match wins:
///
/// 1. object exposing a variant `name`
/// 2. object exposing an ordinal `index`, mapped by position
/// 3. object wrapping a number under `value`, mapped by position
/// 4. raw scalar coercible to a number, mapped by position
/// 5. string matched case-insensitively against the variant names
/// 6. everything else defaults to `Open`
///
/// Keep the order as-is: collapsing steps changes behavior against older
/// decoder versions.
pub fn decode_status(raw: &Value) -> TaskStatus {
    match raw {
        Value::Object(map) => {
            if let Some(name) = map.get("name").and_then(Value::as_str) {
                return TaskStatus::from_name(name).unwrap_or_default();
            }
            if let Some(ordinal) = map.get("index").and_then(coerce_number) {
                return TaskStatus::from_ordinal(ordinal).unwrap_or_default();
            }
            if let Some(ordinal) = map.get("value").and_then(coerce_number) {
                return TaskStatus::from_ordinal(ordinal).unwrap_or_default();
            }
            TaskStatus::default()
        }
        other => {
            if let Some(ordinal) = coerce_number(other) {
                return TaskStatus::from_ordinal(ordinal).unwrap_or_default();
            }
            if let Some(name) = other.as_str() {
                return TaskStatus::from_name(name).unwrap_or_default();
            }
            TaskStatus::default()
        }
    }
}

/// Tolerant string read: prefer the value's own string form, unwrap one
/// `value` wrapper level, otherwise force a string rendering.
pub fn string_field(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Object(map) => match map.get("value") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => raw.to_string(),
        },
        other => other.to_string(),
    }
}

/// Tolerant integer read; absent or malformed values read as zero.
pub fn number_field(raw: &Value) -> u64 {
    coerce_number(raw).unwrap_or(0)
}

/// Tolerant base-unit amount read; anything that is not a digit string after
/// normalization reads as "0".
pub fn amount_field(raw: &Value) -> String {
    let text = string_field(raw);
    if text.is_empty() || text.bytes().any(|b| !b.is_ascii_digit()) {
        "0".to_string()
    } else {
        text
    }
}

fn coerce_number(raw: &Value) -> Option<u64> {
    if let Some(number) = raw.as_u64() {
        return Some(number);
    }
    raw.as_str().and_then(|text| text.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::named_variant(json!({"name": "Completed"}), TaskStatus::Completed)]
    #[case::named_variant_failed(json!({"name": "Failed"}), TaskStatus::Failed)]
    #[case::ordinal_index(json!({"index": 2}), TaskStatus::Completed)]
    #[case::ordinal_index_zero(json!({"index": 0}), TaskStatus::Open)]
    #[case::numeric_wrapper(json!({"value": 3}), TaskStatus::Failed)]
    #[case::numeric_wrapper_string(json!({"value": "1"}), TaskStatus::InVerification)]
    #[case::raw_number(json!(1), TaskStatus::InVerification)]
    #[case::numeric_string(json!("2"), TaskStatus::Completed)]
    #[case::raw_string(json!("completed"), TaskStatus::Completed)]
    #[case::raw_string_mixed_case(json!("inVerification"), TaskStatus::InVerification)]
    fn decodes_every_known_shape(#[case] raw: Value, #[case] expected: TaskStatus) {
        assert_eq!(decode_status(&raw), expected);
    }

    #[rstest]
    #[case::unknown_name(json!({"name": "Archived"}))]
    #[case::out_of_range_ordinal(json!({"index": 9}))]
    #[case::out_of_range_number(json!(42))]
    #[case::unknown_string(json!("archived"))]
    #[case::null(json!(null))]
    #[case::array(json!([1, 2]))]
    #[case::empty_object(json!({}))]
    #[case::negative_number(json!(-1))]
    fn unparseable_shapes_default_to_open(#[case] raw: Value) {
        assert_eq!(decode_status(&raw), TaskStatus::Open);
    }

    #[test]
    fn name_takes_priority_over_index() {
        let raw = json!({"name": "Failed", "index": 0});
        assert_eq!(decode_status(&raw), TaskStatus::Failed);
    }

    #[test]
    fn index_takes_priority_over_value() {
        let raw = json!({"index": 1, "value": 3});
        assert_eq!(decode_status(&raw), TaskStatus::InVerification);
    }

    #[test]
    fn string_field_handles_all_shapes() {
        assert_eq!(string_field(&json!("erd1abc")), "erd1abc");
        assert_eq!(string_field(&json!({"value": "erd1abc"})), "erd1abc");
        assert_eq!(string_field(&json!(42)), "42");
        assert_eq!(string_field(&json!(null)), "");
    }

    #[test]
    fn number_field_defaults_to_zero() {
        assert_eq!(number_field(&json!(5)), 5);
        assert_eq!(number_field(&json!("7")), 7);
        assert_eq!(number_field(&json!(null)), 0);
        assert_eq!(number_field(&json!("many")), 0);
    }

    #[test]
    fn amount_field_keeps_digit_strings_only() {
        assert_eq!(amount_field(&json!("1000000000000000000")), "1000000000000000000");
        assert_eq!(amount_field(&json!(250)), "250");
        assert_eq!(amount_field(&json!("1e18")), "0");
        assert_eq!(amount_field(&json!(null)), "0");
    }
}
