use chrono::NaiveDate;
use flight_hours_api::{ApiError, ApiResult, InvalidDateError};
use heapless::String as HeaplessString;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date coming from outside the system.
pub fn parse_date(value: &str) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| InvalidDateError::new(value))
}

/// Reads an hours field the way the entry form does: blank or garbage counts as zero.
pub fn parse_hours(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite())
        .unwrap_or(0.0)
}

/// Reads a whole-hour count, dropping any fraction. Blank, garbage and negatives count as zero.
pub fn parse_whole_hours(value: &str) -> u32 {
    let hours = parse_hours(value).trunc();
    if hours <= 0.0 {
        0
    } else if hours >= u32::MAX as f64 {
        u32::MAX
    } else {
        hours as u32
    }
}

/// Interprets a stored document value as a number. Numbers and numeric
/// strings are accepted; blank strings, null and anything else are absent.
pub fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                text.parse::<f64>().ok().filter(|number| number.is_finite())
            }
        }
        _ => None,
    }
}

pub fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(lenient_number))
}

/// Copies `value` into a bounded string, failing when it does not fit.
pub fn to_heapless<const N: usize>(value: &str, field: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        ApiError::ValidationError(format!("Value for '{field}' is too long (max {N} chars)"))
    })
}

/// Bounded copy of an optional text field; blank input becomes `None`.
pub fn to_optional_heapless<const N: usize>(
    value: &str,
    field: &str,
) -> ApiResult<Option<HeaplessString<N>>> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        to_heapless(value, field).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(parse_date("2023-02-29").unwrap_err().value, "2023-02-29");
        assert!(parse_date("02/03/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_hours_falls_back_to_zero() {
        assert_eq!(parse_hours("2.5"), 2.5);
        assert_eq!(parse_hours(" 1 "), 1.0);
        assert_eq!(parse_hours(""), 0.0);
        assert_eq!(parse_hours("abc"), 0.0);
        assert_eq!(parse_hours("NaN"), 0.0);
    }

    #[test]
    fn test_parse_whole_hours_truncates() {
        assert_eq!(parse_whole_hours("3"), 3);
        assert_eq!(parse_whole_hours("1.9"), 1);
        assert_eq!(parse_whole_hours("-2"), 0);
        assert_eq!(parse_whole_hours(""), 0);
    }

    #[test]
    fn test_lenient_number() {
        assert_eq!(lenient_number(&json!(60)), Some(60.0));
        assert_eq!(lenient_number(&json!("12.5")), Some(12.5));
        assert_eq!(lenient_number(&json!("")), None);
        assert_eq!(lenient_number(&json!("sixty")), None);
        assert_eq!(lenient_number(&json!(null)), None);
        assert_eq!(lenient_number(&json!(true)), None);
    }

    #[test]
    fn test_to_heapless_rejects_overflow() {
        let short: HeaplessString<5> = to_heapless("abc", "name").unwrap();
        assert_eq!(short.as_str(), "abc");
        assert!(to_heapless::<2>("abc", "name").is_err());
        assert_eq!(to_optional_heapless::<5>("  ", "notes").unwrap(), None);
    }
}
