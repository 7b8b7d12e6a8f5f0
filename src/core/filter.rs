use crate::domain::model::{FilterOutcome, Record, SkipReason, SkippedRecord};
use serde_json::{Map, Value};
use std::num::IntErrorKind;

/// Candidate age keys, highest priority first.
pub const AGE_FIELDS: [&str; 3] = ["age", "Age", "user_age"];

pub const NAME_FIELD: &str = "name";
pub const UNKNOWN_NAME: &str = "Unknown";

/// First candidate key that exists with a non-null value. A falsy value such
/// as `0` still counts as present.
pub fn resolve_age(data: &Map<String, Value>) -> Option<(&'static str, &Value)> {
    AGE_FIELDS.iter().find_map(|&field| match data.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some((field, value)),
    })
}

/// Integer conversion: integers as-is, finite floats truncated toward zero,
/// strings trimmed and parsed base-10. Values beyond the `i64` range clamp to
/// its bounds. Everything else is rejected.
pub fn parse_age(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else if n.is_u64() {
                Some(i64::MAX)
            } else {
                let truncated = n.as_f64()?.trunc();
                // `as` saturates at the i64 bounds.
                truncated.is_finite().then_some(truncated as i64)
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(age) => Some(age),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        },
        // Booleans are not ages, even though they coerce to 0/1 elsewhere.
        _ => None,
    }
}

pub fn display_name(data: &Map<String, Value>) -> String {
    match data.get(NAME_FIELD) {
        Some(Value::String(name)) => name.clone(),
        None | Some(Value::Null) => UNKNOWN_NAME.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Stable filter: kept records stay in input order and are never modified.
pub fn filter_by_age(entries: Vec<Record>, min_age: i64) -> FilterOutcome {
    let input_count = entries.len();
    let mut kept = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in entries.into_iter().enumerate() {
        let age = match resolve_age(&record.data) {
            None => Err(SkipReason::MissingAge),
            Some((field, value)) => parse_age(value).ok_or_else(|| SkipReason::InvalidAge {
                field: field.to_string(),
                value: value.to_string(),
            }),
        };

        match age {
            Ok(age) if age >= min_age => kept.push(record),
            Ok(_) => {}
            Err(reason) => skipped.push(SkippedRecord {
                index,
                name: display_name(&record.data),
                reason,
            }),
        }
    }

    FilterOutcome {
        min_age,
        input_count,
        kept,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_values(records: &[Record]) -> Vec<Value> {
        records.iter().cloned().map(Value::from).collect()
    }

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap())
            .collect()
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_filter_mixed_age_fields() {
        let input = json!([
            {"name": "A", "age": 17},
            {"name": "B", "age": 21},
            {"name": "C", "user_age": 30}
        ]);
        let outcome = filter_by_age(records(input.as_array().cloned().unwrap()), 18);

        assert_eq!(outcome.input_count, 3);
        assert_eq!(
            as_values(&outcome.kept),
            vec![json!({"name": "B", "age": 21}), json!({"name": "C", "user_age": 30})]
        );
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let outcome = filter_by_age(records(vec![json!({"age": 18}), json!({"age": 17})]), 18);
        assert_eq!(as_values(&outcome.kept), vec![json!({"age": 18})]);
    }

    #[test]
    fn test_missing_age_is_skipped_with_name() {
        let outcome = filter_by_age(records(vec![json!({"name": "D"})]), 18);
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].reason, SkipReason::MissingAge);
        assert_eq!(outcome.skipped[0].to_string(), "No age field found for user: D");
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let outcome = filter_by_age(records(vec![json!({"id": 9})]), 0);
        assert_eq!(outcome.skipped[0].name, "Unknown");
    }

    #[test]
    fn test_invalid_age_is_skipped() {
        let outcome = filter_by_age(
            records(vec![
                json!({"name": "E", "age": "twenty"}),
                json!({"name": "F", "age": [20]}),
                json!({"name": "G", "age": true}),
            ]),
            0,
        );
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.skipped.len(), 3);
        assert_eq!(
            outcome.skipped[0].reason,
            SkipReason::InvalidAge {
                field: "age".to_string(),
                value: "\"twenty\"".to_string(),
            }
        );
        assert!(outcome.skipped[0]
            .to_string()
            .starts_with("Invalid age value for user E"));
    }

    #[test]
    fn test_zero_age_counts_as_present() {
        let outcome = filter_by_age(records(vec![json!({"age": 0, "user_age": 50})]), 0);
        assert_eq!(outcome.kept.len(), 1);

        let outcome = filter_by_age(records(vec![json!({"age": 0, "user_age": 50})]), 1);
        assert!(outcome.kept.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_null_falls_through_to_next_candidate() {
        let data = object(json!({"age": null, "Age": 33}));
        let (field, value) = resolve_age(&data).unwrap();
        assert_eq!(field, "Age");
        assert_eq!(value, &json!(33));
    }

    #[test]
    fn test_candidate_priority() {
        let data = object(json!({"user_age": 1, "Age": 2, "age": 3}));
        assert_eq!(resolve_age(&data).unwrap().0, "age");

        let data = object(json!({"user_age": 1, "Age": 2}));
        assert_eq!(resolve_age(&data).unwrap().0, "Age");
    }

    #[test]
    fn test_parse_age_conversions() {
        assert_eq!(parse_age(&json!(25)), Some(25));
        assert_eq!(parse_age(&json!(-3)), Some(-3));
        assert_eq!(parse_age(&json!(21.9)), Some(21));
        assert_eq!(parse_age(&json!(-0.5)), Some(0));
        assert_eq!(parse_age(&json!(" 42 ")), Some(42));
        assert_eq!(parse_age(&json!("+7")), Some(7));
        assert_eq!(parse_age(&json!("21.5")), None);
        assert_eq!(parse_age(&json!("")), None);
        assert_eq!(parse_age(&json!(false)), None);
        assert_eq!(parse_age(&json!(true)), None);
        assert_eq!(parse_age(&json!({"years": 3})), None);
    }

    #[test]
    fn test_large_unsigned_age_clamps() {
        assert_eq!(parse_age(&json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(parse_age(&json!(i64::MAX as u64 + 1)), Some(i64::MAX));
    }

    #[test]
    fn test_large_float_age_clamps() {
        assert_eq!(parse_age(&json!(1e30)), Some(i64::MAX));
        assert_eq!(parse_age(&json!(-1e30)), Some(i64::MIN));
        assert_eq!(parse_age(&json!(1e300)), Some(i64::MAX));
    }

    #[test]
    fn test_long_digit_string_clamps_by_sign() {
        assert_eq!(parse_age(&json!("99999999999999999999")), Some(i64::MAX));
        assert_eq!(parse_age(&json!(" -99999999999999999999 ")), Some(i64::MIN));
        assert_eq!(parse_age(&json!("99999999999999999999x")), None);
    }

    #[test]
    fn test_out_of_range_ages_are_kept() {
        let input = records(vec![
            json!({"name": "U", "age": u64::MAX}),
            json!({"name": "F", "age": 1e30}),
            json!({"name": "S", "age": "99999999999999999999"}),
            json!({"name": "N", "age": "-99999999999999999999"}),
        ]);
        let outcome = filter_by_age(input, 18);

        assert_eq!(outcome.kept.len(), 3);
        assert_eq!(outcome.kept[2].get("name"), Some(&json!("S")));
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_display_name_variants() {
        assert_eq!(display_name(&object(json!({"name": "Zoë"}))), "Zoë");
        assert_eq!(display_name(&object(json!({"name": 42}))), "42");
        assert_eq!(display_name(&object(json!({"name": null}))), "Unknown");
    }
}
