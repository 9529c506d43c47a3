//! Helpers for reading a submitted form value map into DTO fields.
//!
//! Inputs store strings (checkboxes store bools); these coercions are the
//! counterpart used by page-level submit handlers.

use serde_json::Value;

use crate::shared::components::dynamic_form::FormData;

pub fn text(data: &FormData, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Trimmed text, `None` when empty.
pub fn opt_text(data: &FormData, key: &str) -> Option<String> {
    let value = text(data, key);
    (!value.is_empty()).then_some(value)
}

pub fn flag(data: &FormData, key: &str) -> bool {
    match data.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

pub fn number(data: &FormData, key: &str) -> f64 {
    match data.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn integer(data: &FormData, key: &str) -> i64 {
    number(data, key) as i64
}

pub fn opt_number(data: &FormData, key: &str) -> Option<f64> {
    match data.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: serde_json::Value) -> FormData {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_text_trims_and_defaults() {
        let form = data(json!({"name": "  Ann ", "qty": 3}));
        assert_eq!(text(&form, "name"), "Ann");
        assert_eq!(text(&form, "qty"), "3");
        assert_eq!(text(&form, "missing"), "");
    }

    #[test]
    fn test_opt_text_skips_empty() {
        let form = data(json!({"a": "", "b": "x"}));
        assert_eq!(opt_text(&form, "a"), None);
        assert_eq!(opt_text(&form, "b"), Some("x".to_string()));
    }

    #[test]
    fn test_flag_accepts_bool_and_string() {
        let form = data(json!({"a": true, "b": "true", "c": "false", "d": ""}));
        assert!(flag(&form, "a"));
        assert!(flag(&form, "b"));
        assert!(!flag(&form, "c"));
        assert!(!flag(&form, "d"));
    }

    #[test]
    fn test_number_parses_strings() {
        let form = data(json!({"a": 2.5, "b": " 42 ", "c": "oops"}));
        assert_eq!(number(&form, "a"), 2.5);
        assert_eq!(number(&form, "b"), 42.0);
        assert_eq!(number(&form, "c"), 0.0);
        assert_eq!(opt_number(&form, "c"), None);
        assert_eq!(integer(&form, "b"), 42);
    }
}
