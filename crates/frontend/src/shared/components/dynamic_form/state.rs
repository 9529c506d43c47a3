//! Pure interaction state of the dynamic form.
//!
//! Like the table, the form keeps its whole lifecycle (value map, errors,
//! touched set, section collapse, array items) in plain data so it can be
//! exercised in unit tests. The component wires events into these methods.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::schema::{FormConfig, FormData, FormMode, SectionKind};

#[derive(Clone, Debug)]
pub struct FormState {
    pub mode: FormMode,
    pub data: FormData,
    /// field name (composite for array items) → message
    pub errors: HashMap<String, String>,
    pub touched: HashSet<String>,
    /// Section ids whose body is collapsed. Everything starts expanded.
    pub collapsed: HashSet<String>,
    pub submitting: bool,
}

/// Split a composite field name: `"lines[0].qty"` → `("lines", 0, "qty")`.
/// Plain names return `None`.
pub fn parse_composite(name: &str) -> Option<(&str, usize, &str)> {
    let open = name.find('[')?;
    let close = name[open..].find(']')? + open;
    let index: usize = name[open + 1..close].parse().ok()?;
    let rest = name.get(close + 1..)?;
    let field = rest.strip_prefix('.')?;
    if field.is_empty() {
        return None;
    }
    Some((&name[..open], index, field))
}

/// Composite name of one array item field.
pub fn composite_name(array_field: &str, index: usize, field: &str) -> String {
    format!("{}[{}].{}", array_field, index, field)
}

impl FormState {
    /// Initialize once per mount. Per-field precedence:
    /// `initial_data` value ?? `default_value` ?? kind-appropriate empty.
    pub fn init(config: &FormConfig) -> Self {
        let mut data = FormData::new();

        for section in &config.sections {
            match &section.kind {
                SectionKind::Standard => {
                    for field in &section.fields {
                        let value = config
                            .initial_data
                            .get(&field.name)
                            .cloned()
                            .or_else(|| field.default_value.clone())
                            .unwrap_or_else(|| field.kind.empty_value());
                        data.insert(field.name.clone(), value);
                    }
                }
                SectionKind::Array { array_field, .. } => {
                    let value = config
                        .initial_data
                        .get(array_field)
                        .cloned()
                        .unwrap_or_else(|| Value::Array(Vec::new()));
                    data.insert(array_field.clone(), value);
                }
            }
        }

        Self {
            mode: config.mode,
            data,
            errors: HashMap::new(),
            touched: HashSet::new(),
            collapsed: HashSet::new(),
            submitting: false,
        }
    }

    /// Current value of a plain or composite field name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match parse_composite(name) {
            Some((array_field, index, field)) => self
                .data
                .get(array_field)?
                .as_array()?
                .get(index)?
                .as_object()?
                .get(field),
            None => self.data.get(name),
        }
    }

    /// Write a field value. A no-op in view mode: view forms are immutable
    /// no matter what handlers get invoked.
    pub fn set_value(&mut self, name: &str, value: Value) {
        if self.mode == FormMode::View {
            return;
        }
        match parse_composite(name) {
            Some((array_field, index, field)) => {
                let Some(items) = self.data.get_mut(array_field).and_then(Value::as_array_mut)
                else {
                    return;
                };
                let Some(item) = items.get_mut(index).and_then(Value::as_object_mut) else {
                    return;
                };
                item.insert(field.to_string(), value);
            }
            None => {
                self.data.insert(name.to_string(), value);
            }
        }
        self.touched.insert(name.to_string());
    }

    pub fn array_len(&self, array_field: &str) -> usize {
        self.data
            .get(array_field)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Append a new item (a clone of the section's default) to an array
    /// field. Creates the array when absent.
    pub fn array_add(&mut self, array_field: &str, default_item: &FormData) {
        if self.mode == FormMode::View {
            return;
        }
        let entry = self
            .data
            .entry(array_field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(items) = entry.as_array_mut() {
            items.push(Value::Object(default_item.clone()));
        }
    }

    /// Remove one item; later items shift down so composite names re-index.
    pub fn array_remove(&mut self, array_field: &str, index: usize) {
        if self.mode == FormMode::View {
            return;
        }
        if let Some(items) = self.data.get_mut(array_field).and_then(Value::as_array_mut) {
            if index < items.len() {
                items.remove(index);
            }
        }
        // Stale per-item errors would point at shifted indices.
        let prefix = format!("{}[", array_field);
        self.errors.retain(|name, _| !name.starts_with(&prefix));
        self.touched.retain(|name| !name.starts_with(&prefix));
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        !self.collapsed.contains(section_id)
    }

    /// Collapsing hides a section body but never touches its data.
    pub fn toggle_section(&mut self, section_id: &str) {
        if !self.collapsed.remove(section_id) {
            self.collapsed.insert(section_id.to_string());
        }
    }

    pub fn touch(&mut self, name: &str) {
        self.touched.insert(name.to_string());
    }

    pub fn error_of(&self, name: &str) -> Option<&String> {
        self.errors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::dynamic_form::schema::{
        FieldKind, FormField, FormSection,
    };
    use serde_json::json;

    fn line_item(product: &str, qty: i64) -> FormData {
        let mut item = FormData::new();
        item.insert("product".to_string(), json!(product));
        item.insert("qty".to_string(), json!(qty));
        item
    }

    fn config(mode: FormMode) -> FormConfig {
        FormConfig::new("Order", mode)
            .sections(vec![
                FormSection::new("general").title("General").fields(vec![
                    FormField::new("number", "Number", FieldKind::Text).required(),
                    FormField::new("urgent", "Urgent", FieldKind::Checkbox),
                    FormField::new("comment", "Comment", FieldKind::Textarea)
                        .default_value(json!("n/a")),
                ]),
                FormSection::new("lines").title("Lines").array(
                    "lines",
                    "Line",
                    "Add line",
                    line_item("", 1),
                ),
            ])
    }

    #[test]
    fn test_init_precedence_initial_then_default_then_empty() {
        let mut cfg = config(FormMode::Edit);
        cfg.initial_data.insert("number".to_string(), json!("ORD-1"));

        let state = FormState::init(&cfg);
        // initial_data wins
        assert_eq!(state.value("number"), Some(&json!("ORD-1")));
        // default_value next
        assert_eq!(state.value("comment"), Some(&json!("n/a")));
        // kind default last: false for checkbox, "" otherwise
        assert_eq!(state.value("urgent"), Some(&json!(false)));
        // array fields default to an empty list
        assert_eq!(state.data.get("lines"), Some(&json!([])));
    }

    #[test]
    fn test_set_and_get_plain_value() {
        let mut state = FormState::init(&config(FormMode::Create));
        state.set_value("number", json!("ORD-7"));
        assert_eq!(state.value("number"), Some(&json!("ORD-7")));
        assert!(state.touched.contains("number"));
    }

    #[test]
    fn test_view_mode_is_immutable() {
        let mut cfg = config(FormMode::View);
        cfg.initial_data.insert("number".to_string(), json!("ORD-1"));
        cfg.initial_data
            .insert("lines".to_string(), json!([{"product": "Desk", "qty": 2}]));

        let mut state = FormState::init(&cfg);
        let before = state.data.clone();

        state.set_value("number", json!("HACKED"));
        state.set_value("lines[0].qty", json!(99));
        state.array_add("lines", &line_item("X", 1));
        state.array_remove("lines", 0);

        assert_eq!(state.data, before);
        assert!(state.touched.is_empty());
    }

    #[test]
    fn test_parse_composite() {
        assert_eq!(parse_composite("lines[0].qty"), Some(("lines", 0, "qty")));
        assert_eq!(
            parse_composite("items[12].product_name"),
            Some(("items", 12, "product_name"))
        );
        assert_eq!(parse_composite("plain"), None);
        assert_eq!(parse_composite("bad[x].f"), None);
        assert_eq!(parse_composite("bad[1]"), None);
        assert_eq!(parse_composite("bad[1]."), None);
    }

    #[test]
    fn test_array_add_remove_reindexes() {
        let mut state = FormState::init(&config(FormMode::Create));

        state.array_add("lines", &line_item("Desk", 2));
        state.array_add("lines", &line_item("Lamp", 1));
        assert_eq!(state.array_len("lines"), 2);

        state.set_value("lines[1].qty", json!(5));
        assert_eq!(state.value("lines[1].qty"), Some(&json!(5)));

        // Removing the first item leaves exactly the second, re-indexed to 0.
        state.array_remove("lines", 0);
        assert_eq!(state.array_len("lines"), 1);
        assert_eq!(state.value("lines[0].product"), Some(&json!("Lamp")));
        assert_eq!(state.value("lines[0].qty"), Some(&json!(5)));
        assert_eq!(state.value("lines[1].qty"), None);
    }

    #[test]
    fn test_array_remove_clears_stale_item_errors() {
        let mut state = FormState::init(&config(FormMode::Create));
        state.array_add("lines", &line_item("", 1));
        state
            .errors
            .insert("lines[0].product".to_string(), "Required".to_string());
        state
            .errors
            .insert("number".to_string(), "Required".to_string());

        state.array_remove("lines", 0);
        assert!(!state.errors.contains_key("lines[0].product"));
        assert!(state.errors.contains_key("number"));
    }

    #[test]
    fn test_composite_set_on_missing_item_is_ignored() {
        let mut state = FormState::init(&config(FormMode::Create));
        state.set_value("lines[3].qty", json!(1));
        assert_eq!(state.array_len("lines"), 0);
    }

    #[test]
    fn test_sections_start_expanded_and_toggle_independently() {
        let mut state = FormState::init(&config(FormMode::Create));
        assert!(state.is_expanded("general"));
        assert!(state.is_expanded("lines"));

        state.toggle_section("general");
        assert!(!state.is_expanded("general"));
        assert!(state.is_expanded("lines"));

        state.toggle_section("general");
        assert!(state.is_expanded("general"));
    }

    #[test]
    fn test_collapse_keeps_data() {
        let mut state = FormState::init(&config(FormMode::Create));
        state.set_value("number", json!("ORD-2"));
        state.toggle_section("general");
        assert_eq!(state.value("number"), Some(&json!("ORD-2")));
    }
}
