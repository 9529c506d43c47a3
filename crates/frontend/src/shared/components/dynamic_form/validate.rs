//! Field validation.
//!
//! Runs over every *visible* field (condition-gated fields and sections are
//! skipped entirely) and collects one message per failing field. View-mode
//! forms are never validated.

use std::collections::HashMap;

use serde_json::Value;

use super::schema::{FormConfig, FormData, FormField, FormMode, SectionKind};
use super::state::composite_name;

/// Required-ness treats `0` and `false` as present. Only a missing value,
/// null, or an empty/whitespace string counts as empty.
fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate one field value. First failing rule wins.
pub fn validate_field(field: &FormField, value: Option<&Value>, data: &FormData) -> Option<String> {
    if is_empty_value(value) {
        if field.required {
            return Some(format!("{} is required", field.label));
        }
        return None;
    }
    let Some(value) = value else {
        return None;
    };

    if field.kind.is_numeric() {
        let Some(number) = value_as_f64(value) else {
            return Some(format!("{} must be a number", field.label));
        };
        if let Some(min) = field.min {
            if number < min {
                return Some(format!("{} must be at least {}", field.label, min));
            }
        }
        if let Some(max) = field.max {
            if number > max {
                return Some(format!("{} must be at most {}", field.label, max));
            }
        }
    }

    if field.kind.is_textual() {
        let text = value_as_str(value);
        let length = text.chars().count();
        if let Some(min) = field.min_length {
            if length < min {
                return Some(format!(
                    "{} must contain at least {} characters",
                    field.label, min
                ));
            }
        }
        if let Some(max) = field.max_length {
            if length > max {
                return Some(format!(
                    "{} must not exceed {} characters",
                    field.label, max
                ));
            }
        }
    }

    if let Some(pattern) = &field.pattern {
        match regex::Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(&value_as_str(value)) {
                    return Some(format!("{} has an invalid format", field.label));
                }
            }
            Err(err) => {
                // A broken descriptor pattern degrades silently rather than
                // blocking the form.
                log::warn!("invalid pattern for field '{}': {}", field.name, err);
            }
        }
    }

    if let Some(validate) = &field.validate {
        if let Some(message) = validate(value, data) {
            return Some(message);
        }
    }

    None
}

fn condition_passes(condition: &Option<super::schema::Condition>, data: &FormData) -> bool {
    condition.as_ref().map_or(true, |check| check(data))
}

/// Validate the whole form. Returns an empty map in view mode.
pub fn validate_form(config: &FormConfig, data: &FormData) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if config.mode == FormMode::View {
        return errors;
    }

    for section in &config.sections {
        if !condition_passes(&section.condition, data) {
            continue;
        }
        match &section.kind {
            SectionKind::Standard => {
                for field in &section.fields {
                    if !condition_passes(&field.condition, data) {
                        continue;
                    }
                    if let Some(message) = validate_field(field, data.get(&field.name), data) {
                        errors.insert(field.name.clone(), message);
                    }
                }
            }
            SectionKind::Array { array_field, .. } => {
                let items = data.get(array_field).and_then(Value::as_array);
                let Some(items) = items else { continue };
                for (index, item) in items.iter().enumerate() {
                    let item = item.as_object();
                    for field in &section.fields {
                        if !condition_passes(&field.condition, data) {
                            continue;
                        }
                        let value = item.and_then(|i| i.get(&field.name));
                        if let Some(message) = validate_field(field, value, data) {
                            errors.insert(composite_name(array_field, index, &field.name), message);
                        }
                    }
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::dynamic_form::schema::{
        Condition, FieldKind, FieldValidator, FormField, FormSection,
    };
    use serde_json::json;
    use std::sync::Arc;

    fn data(pairs: serde_json::Value) -> FormData {
        pairs.as_object().expect("object literal").clone()
    }

    #[test]
    fn test_required_rejects_empty_but_not_zero_or_false() {
        let number = FormField::new("count", "Count", FieldKind::Number).required();
        let flag = FormField::new("flag", "Flag", FieldKind::Checkbox).required();
        let name = FormField::new("name", "Name", FieldKind::Text).required();
        let empty = FormData::new();

        // 0 and false are valid values for a required field
        assert_eq!(validate_field(&number, Some(&json!(0)), &empty), None);
        assert_eq!(validate_field(&flag, Some(&json!(false)), &empty), None);

        // "", whitespace, null and missing are not
        assert!(validate_field(&name, Some(&json!("")), &empty).is_some());
        assert!(validate_field(&name, Some(&json!("   ")), &empty).is_some());
        assert!(validate_field(&name, Some(&json!(null)), &empty).is_some());
        assert!(validate_field(&name, None, &empty).is_some());
    }

    #[test]
    fn test_optional_empty_field_skips_all_rules() {
        let field = FormField::new("age", "Age", FieldKind::Number).range(18.0, 99.0);
        assert_eq!(validate_field(&field, Some(&json!("")), &FormData::new()), None);
        assert_eq!(validate_field(&field, None, &FormData::new()), None);
    }

    #[test]
    fn test_numeric_min_max() {
        let field = FormField::new("age", "Age", FieldKind::Number).range(18.0, 99.0);
        let empty = FormData::new();

        assert_eq!(validate_field(&field, Some(&json!(42)), &empty), None);
        // Inputs deliver strings; they parse before comparing
        assert_eq!(validate_field(&field, Some(&json!("42")), &empty), None);
        assert!(validate_field(&field, Some(&json!(17)), &empty)
            .unwrap()
            .contains("at least 18"));
        assert!(validate_field(&field, Some(&json!("120")), &empty)
            .unwrap()
            .contains("at most 99"));
        assert!(validate_field(&field, Some(&json!("abc")), &empty)
            .unwrap()
            .contains("must be a number"));
    }

    #[test]
    fn test_text_length_rules() {
        let field = FormField::new("code", "Code", FieldKind::Text).length(3, 5);
        let empty = FormData::new();

        assert_eq!(validate_field(&field, Some(&json!("abc")), &empty), None);
        assert!(validate_field(&field, Some(&json!("ab")), &empty)
            .unwrap()
            .contains("at least 3"));
        assert!(validate_field(&field, Some(&json!("abcdef")), &empty)
            .unwrap()
            .contains("not exceed 5"));
    }

    #[test]
    fn test_pattern_rule() {
        let field = FormField::new("sku", "SKU", FieldKind::Text).pattern("^[A-Z]{3}-\\d{3}$");
        let empty = FormData::new();

        assert_eq!(validate_field(&field, Some(&json!("DSK-100")), &empty), None);
        assert!(validate_field(&field, Some(&json!("dsk100")), &empty)
            .unwrap()
            .contains("invalid format"));
    }

    #[test]
    fn test_custom_validator_sees_whole_form() {
        let validator: FieldValidator = Arc::new(|value, form| {
            let max = form.get("stock").and_then(|v| v.as_i64()).unwrap_or(0);
            (value.as_i64().unwrap_or(0) > max).then(|| "Not enough stock".to_string())
        });
        let field =
            FormField::new("qty", "Quantity", FieldKind::Number).validate_with(validator);
        let form = data(json!({"stock": 3}));

        assert_eq!(validate_field(&field, Some(&json!(2)), &form), None);
        assert_eq!(
            validate_field(&field, Some(&json!(5)), &form),
            Some("Not enough stock".to_string())
        );
    }

    #[test]
    fn test_hidden_fields_and_sections_are_not_validated() {
        let gated: Condition = Arc::new(|form: &FormData| {
            form.get("discounted") == Some(&json!(true))
        });
        let config = FormConfig::new("Product", FormMode::Edit).sections(vec![
            FormSection::new("pricing").fields(vec![
                FormField::new("discounted", "Discounted", FieldKind::Checkbox),
                FormField::new("discount_percent", "Discount %", FieldKind::Number)
                    .required()
                    .condition(gated),
            ]),
            FormSection::new("internal")
                .condition(Arc::new(|_| false))
                .fields(vec![
                    FormField::new("internal_code", "Internal code", FieldKind::Text).required(),
                ]),
        ]);

        // Gate closed: the required discount field is invisible, no error.
        let form = data(json!({"discounted": false, "discount_percent": ""}));
        assert!(validate_form(&config, &form).is_empty());

        // Gate open: now it validates.
        let form = data(json!({"discounted": true, "discount_percent": ""}));
        let errors = validate_form(&config, &form);
        assert!(errors.contains_key("discount_percent"));
        assert!(!errors.contains_key("internal_code"));
    }

    #[test]
    fn test_array_items_validate_under_composite_names() {
        let config = FormConfig::new("Order", FormMode::Edit).sections(vec![
            FormSection::new("lines")
                .array("lines", "Line", "Add line", FormData::new())
                .fields(vec![
                    FormField::new("product", "Product", FieldKind::Text).required(),
                    FormField::new("qty", "Quantity", FieldKind::Number).min(1.0),
                ]),
        ]);
        let form = data(json!({
            "lines": [
                {"product": "Desk", "qty": 2},
                {"product": "", "qty": 0},
            ]
        }));

        let errors = validate_form(&config, &form);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("lines[1].product"));
        assert!(errors.contains_key("lines[1].qty"));
    }

    #[test]
    fn test_view_mode_never_validates() {
        let config = FormConfig::new("Order", FormMode::View).sections(vec![
            FormSection::new("general")
                .fields(vec![FormField::new("number", "Number", FieldKind::Text).required()]),
        ]);
        assert!(validate_form(&config, &FormData::new()).is_empty());
    }
}
