//! # Lenient Deserializers
//!
//! The backend is inconsistent about numeric fields: the same amount may arrive
//! as `50000`, `50000.0`, `"50000"` or `null` depending on the endpoint.
//! These helpers accept all of those shapes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a JSON value into an integer currency amount.
///
/// Non-numeric or missing values yield `None`.
pub fn value_to_amount(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| v as i64))
            .or_else(|| n.as_f64().map(|v| v.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|v| v.round() as i64))
        }
        _ => None,
    }
}

/// Deserialize an amount, defaulting to 0.
pub fn amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value).unwrap_or(0))
}

/// Deserialize an optional amount. Absent, null and unparseable values are `None`.
pub fn opt_amount<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value))
}

/// Deserialize a float (percentages), accepting numeric strings.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Render an identifier that may be a number or a string.
pub fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Deserialize an identifier as a string, defaulting to empty.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_id(&value).unwrap_or_default())
}

/// Deserialize an optional identifier.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_id(&value))
}

/// Deserialize a string that may be `null`, defaulting to empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        assert_eq!(value_to_amount(&json!(50000)), Some(50000));
        assert_eq!(value_to_amount(&json!("75000")), Some(75000));
        assert_eq!(value_to_amount(&json!(1250.6)), Some(1251));
        assert_eq!(value_to_amount(&json!("1000.00")), Some(1000));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert_eq!(value_to_amount(&json!(null)), None);
        assert_eq!(value_to_amount(&json!("")), None);
        assert_eq!(value_to_amount(&json!("abc")), None);
        assert_eq!(value_to_amount(&json!([1, 2])), None);
    }

    #[test]
    fn test_id_from_number_or_string() {
        assert_eq!(value_to_id(&json!(7)), Some("7".to_string()));
        assert_eq!(value_to_id(&json!("ev-7")), Some("ev-7".to_string()));
        assert_eq!(value_to_id(&json!("")), None);
        assert_eq!(value_to_id(&json!(null)), None);
    }
}
