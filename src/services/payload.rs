//! Field extraction from loosely-typed webhook bodies.
//!
//! Upstream services disagree on where they put things, so each field is
//! probed across the shapes we've seen, in a fixed order. Nothing here fails:
//! a field that can't be found is `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::services::event_table::DEFAULT_EVENT;

/// Body fields naming the event, highest priority first.
const EVENT_FIELDS: [&str; 4] = ["event_type", "type", "topic", "event"];

/// How a source field expresses money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUnit {
    /// Integer cents (Stripe style); divided by 100.
    Minor,
    /// Already a decimal major-unit value (Shopify `total_price`).
    Major,
}

pub struct AmountSource {
    pub path: &'static [&'static str],
    pub unit: AmountUnit,
}

pub const AMOUNT_SOURCES: [AmountSource; 3] = [
    AmountSource { path: &["amount"], unit: AmountUnit::Minor },
    AmountSource { path: &["data", "object", "amount"], unit: AmountUnit::Minor },
    AmountSource { path: &["total_price"], unit: AmountUnit::Major },
];

pub const CUSTOMER_NAME_SOURCES: [&[&str]; 4] = [
    &["customer_name"],
    &["data", "object", "customer_name"],
    &["customer", "first_name"],
    &["name"],
];

/// Parses a raw request body. An empty body is `{}`; anything else that isn't
/// JSON, whitespace included, is wrapped as `{"raw": body}`.
pub fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Webhook body is not JSON ({}), keeping it raw", e);
            let mut wrapper = Map::new();
            wrapper.insert(
                "raw".to_string(),
                Value::String(String::from_utf8_lossy(body).into_owned()),
            );
            Value::Object(wrapper)
        }
    }
}

/// First non-empty of the body's event fields, then the `event` query
/// parameter, then the default key.
pub fn resolve_event_type(body: &Value, query_event: Option<&str>) -> String {
    EVENT_FIELDS
        .iter()
        .find_map(|field| non_empty_str(body.get(*field)))
        .or_else(|| query_event.filter(|event| !event.is_empty()))
        .unwrap_or(DEFAULT_EVENT)
        .to_string()
}

/// First non-empty string among `fields`.
pub fn first_string(body: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| non_empty_str(body.get(*field)))
        .map(str::to_string)
}

pub fn extract_amount(body: &Value) -> Option<String> {
    AMOUNT_SOURCES.iter().find_map(|source| {
        value_at(body, source.path)
            .and_then(as_decimal)
            .map(|amount| normalize_amount(amount, source.unit))
    })
}

pub fn extract_customer_name(body: &Value) -> Option<String> {
    CUSTOMER_NAME_SOURCES
        .iter()
        .find_map(|path| value_at(body, path).and_then(scalar_to_string))
}

/// Formats an amount in major units with exactly two decimal places.
pub fn normalize_amount(amount: Decimal, unit: AmountUnit) -> String {
    let mut major = match unit {
        AmountUnit::Minor => amount / Decimal::ONE_HUNDRED,
        AmountUnit::Major => amount,
    };
    major.rescale(2);
    major.to_string()
}

fn value_at<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(body, |value, key| value.get(*key))
        .filter(|value| !value.is_null())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_fields_follow_priority() {
        let body = json!({"event_type": "a", "type": "b", "topic": "c", "event": "d"});
        assert_eq!(resolve_event_type(&body, Some("q")), "a");

        let body = json!({"type": "b", "topic": "c", "event": "d"});
        assert_eq!(resolve_event_type(&body, Some("q")), "b");

        let body = json!({"topic": "c", "event": "d"});
        assert_eq!(resolve_event_type(&body, Some("q")), "c");

        let body = json!({"event": "d"});
        assert_eq!(resolve_event_type(&body, Some("q")), "d");

        assert_eq!(resolve_event_type(&json!({}), Some("q")), "q");
        assert_eq!(resolve_event_type(&json!({}), None), DEFAULT_EVENT);
    }

    #[test]
    fn empty_and_non_string_event_fields_are_skipped() {
        let body = json!({"event_type": "", "type": 42, "topic": "doorbell"});
        assert_eq!(resolve_event_type(&body, None), "doorbell");
        assert_eq!(resolve_event_type(&json!({}), Some("")), DEFAULT_EVENT);
        assert_eq!(resolve_event_type(&json!([1, 2]), None), DEFAULT_EVENT);
    }

    #[test]
    fn minor_unit_amounts_are_divided() {
        assert_eq!(extract_amount(&json!({"amount": 4999})).as_deref(), Some("49.99"));
        assert_eq!(
            extract_amount(&json!({"data": {"object": {"amount": 12500}}})).as_deref(),
            Some("125.00")
        );
        assert_eq!(extract_amount(&json!({"amount": "250"})).as_deref(), Some("2.50"));
    }

    #[test]
    fn total_price_is_already_decimal() {
        assert_eq!(extract_amount(&json!({"total_price": "149.99"})).as_deref(), Some("149.99"));
        assert_eq!(extract_amount(&json!({"total_price": 20})).as_deref(), Some("20.00"));
    }

    #[test]
    fn amount_probe_order() {
        let body = json!({"amount": 100, "data": {"object": {"amount": 200}}, "total_price": "3.00"});
        assert_eq!(extract_amount(&body).as_deref(), Some("1.00"));

        let body = json!({"amount": null, "data": {"object": {"amount": 200}}});
        assert_eq!(extract_amount(&body).as_deref(), Some("2.00"));

        let body = json!({"amount": "lots", "total_price": "3.5"});
        assert_eq!(extract_amount(&body).as_deref(), Some("3.50"));

        assert_eq!(extract_amount(&json!({"raw": "amount=5"})), None);
    }

    #[test]
    fn customer_name_probe_order() {
        let body = json!({
            "customer_name": "John Doe",
            "data": {"object": {"customer_name": "Jane Smith"}},
            "customer": {"first_name": "Bob"}
        });
        assert_eq!(extract_customer_name(&body).as_deref(), Some("John Doe"));

        let body = json!({"data": {"object": {"customer_name": "Jane Smith"}}});
        assert_eq!(extract_customer_name(&body).as_deref(), Some("Jane Smith"));

        let body = json!({"customer": {"first_name": "Bob"}, "name": "Robert"});
        assert_eq!(extract_customer_name(&body).as_deref(), Some("Bob"));

        assert_eq!(extract_customer_name(&json!({"name": "Ann"})).as_deref(), Some("Ann"));
        assert_eq!(extract_customer_name(&json!({"customer": "Bob"})), None);
    }

    #[test]
    fn unparseable_body_is_wrapped() {
        assert_eq!(parse_body(b"not json {"), json!({"raw": "not json {"}));
        assert_eq!(parse_body(b""), json!({}));
        assert_eq!(parse_body(b"  \n"), json!({"raw": "  \n"}));
        assert_eq!(parse_body(br#"{"event":"sale"}"#), json!({"event": "sale"}));
    }

    #[test]
    fn first_string_skips_blanks() {
        let body = json!({"message": "", "custom_message": "Hello"});
        assert_eq!(first_string(&body, &["message", "custom_message"]).as_deref(), Some("Hello"));
        assert_eq!(first_string(&body, &["sound"]), None);
    }
}
