//! Pure interaction state of the dynamic table.
//!
//! Everything in here is plain data plus functions — no signals, no DOM —
//! so the whole filter/sort/paginate/resize lifecycle is unit-testable.
//! The component in `mod.rs` owns one `TableState` inside a signal and
//! calls into these methods from its event handlers.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use super::schema::{FilterKind, Row, TableColumn};

/// Fixed page size option set.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Width applied when a column specifies neither `width` nor `min_width`.
pub const DEFAULT_COLUMN_WIDTH: f64 = 160.0;

/// Hard floor for resizing columns without an explicit `min_width`.
pub const MIN_COLUMN_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// At most one resize runs at a time; this captures its starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOp {
    pub key: String,
    pub start_x: f64,
    pub start_width: f64,
    pub min_width: f64,
}

#[derive(Debug, Clone)]
pub struct TableState {
    pub search: String,
    /// Active filter text per column key. Empty values are never stored.
    pub filters: HashMap<String, String>,
    /// Single-column sort; `None` = natural row order.
    pub sort: Option<(String, SortOrder)>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    /// Visible subset of column keys, in descriptor order.
    pub visible: Vec<String>,
    pub widths: HashMap<String, f64>,
    pub resize: Option<ResizeOp>,
}

fn default_width(column: &TableColumn) -> f64 {
    column
        .width
        .or(column.min_width)
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
}

fn min_width_floor(column: &TableColumn) -> f64 {
    column.min_width.unwrap_or(MIN_COLUMN_WIDTH)
}

impl TableState {
    pub fn new(columns: &[TableColumn]) -> Self {
        let mut state = Self {
            search: String::new(),
            filters: HashMap::new(),
            sort: None,
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
            visible: Vec::new(),
            widths: HashMap::new(),
            resize: None,
        };
        state.sync_columns(columns);
        state
    }

    /// Reconcile state with a changed descriptor list: prune state of
    /// removed columns, give new columns defaults, keep the customizations
    /// of surviving ones. A removed-then-re-added key gets fresh defaults.
    pub fn sync_columns(&mut self, columns: &[TableColumn]) {
        let hidden: Vec<String> = self
            .widths
            .keys()
            .filter(|key| !self.visible.contains(key))
            .cloned()
            .collect();

        let mut widths = HashMap::new();
        let mut visible = Vec::new();
        for column in columns {
            let width = self
                .widths
                .get(&column.key)
                .copied()
                .unwrap_or_else(|| default_width(column));
            widths.insert(column.key.clone(), width);

            let was_known = self.widths.contains_key(&column.key);
            if !was_known || !hidden.contains(&column.key) {
                visible.push(column.key.clone());
            }
        }

        self.filters
            .retain(|key, _| columns.iter().any(|c| c.key == *key));
        if let Some((key, _)) = &self.sort {
            if !columns.iter().any(|c| c.key == *key) {
                self.sort = None;
            }
        }
        self.widths = widths;
        self.visible = visible;
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.page = 1;
    }

    pub fn set_filter(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value);
        }
        self.page = 1;
    }

    /// Sort click cycle: none → asc → desc → none.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match &self.sort {
            Some((k, SortOrder::Asc)) if k == key => Some((key.to_string(), SortOrder::Desc)),
            Some((k, SortOrder::Desc)) if k == key => None,
            _ => Some((key.to_string(), SortOrder::Asc)),
        };
        self.page = 1;
    }

    /// Explicit navigation clamps instead of resetting.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.iter().any(|k| k == key)
    }

    /// Show/hide a column. Hiding keeps its filter and width state so
    /// re-enabling restores the prior configuration.
    pub fn toggle_column(&mut self, key: &str, columns: &[TableColumn]) {
        let currently_visible = self.is_visible(key);
        self.visible = columns
            .iter()
            .map(|c| c.key.as_str())
            .filter(|k| {
                if *k == key {
                    !currently_visible
                } else {
                    self.is_visible(k)
                }
            })
            .map(String::from)
            .collect();
    }

    pub fn width_of(&self, key: &str) -> f64 {
        self.widths.get(key).copied().unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Start a resize. Ignored while another one is active.
    pub fn begin_resize(&mut self, column: &TableColumn, client_x: f64) {
        if self.resize.is_some() {
            return;
        }
        self.resize = Some(ResizeOp {
            key: column.key.clone(),
            start_x: client_x,
            start_width: self.width_of(&column.key),
            min_width: min_width_floor(column),
        });
    }

    pub fn resize_to(&mut self, client_x: f64) {
        if let Some(op) = &self.resize {
            let new_width = (op.start_width + (client_x - op.start_x)).max(op.min_width);
            self.widths.insert(op.key.clone(), new_width);
        }
    }

    pub fn end_resize(&mut self) {
        self.resize = None;
    }
}

// ---------------------------------------------------------------------------
// Row pipeline: filter → search → sort → slice
// ---------------------------------------------------------------------------

/// String form used for search, text filters and string sorting.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Does `value` pass the column's active filter text?
pub fn column_filter_matches(column: &TableColumn, value: Option<&Value>, filter: &str) -> bool {
    let Some(config) = &column.filter else {
        // Not filterable; an active filter for this column cannot exist,
        // but never drop rows if one sneaks in.
        return true;
    };

    if let Some(predicate) = &config.predicate {
        return predicate(value, filter, column);
    }

    let displayed = display_value(value).to_lowercase();
    let needle = filter.to_lowercase();
    match config.kind {
        FilterKind::Text => displayed.contains(&needle),
        FilterKind::Number => match (value.and_then(value_as_f64), filter.trim().parse::<f64>()) {
            (Some(actual), Ok(wanted)) => actual == wanted,
            _ => false,
        },
        FilterKind::Date => displayed.starts_with(&needle),
        FilterKind::Select => displayed == needle,
    }
}

/// Global search: any field's string form contains the term.
pub fn row_matches_search(row: &Row, needle_lower: &str) -> bool {
    row.values()
        .any(|v| display_value(Some(v)).to_lowercase().contains(needle_lower))
}

/// Apply every active column filter (AND) and the global search (AND).
pub fn filter_rows(
    rows: &[Row],
    columns: &[TableColumn],
    filters: &HashMap<String, String>,
    search: &str,
) -> Vec<Row> {
    let needle = search.trim().to_lowercase();

    rows.iter()
        .filter(|row| {
            let passes_filters = columns.iter().all(|column| {
                match filters.get(&column.key) {
                    Some(filter) if !filter.is_empty() => {
                        column_filter_matches(column, row.get(&column.key), filter)
                    }
                    _ => true,
                }
            });
            let passes_search = needle.is_empty() || row_matches_search(row, &needle);
            passes_filters && passes_search
        })
        .cloned()
        .collect()
}

fn compare_values(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let a_null = matches!(a, None | Some(Value::Null));
    let b_null = matches!(b, None | Some(Value::Null));
    match (a_null, b_null) {
        // Nulls sort last regardless of direction.
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = match (
                a.and_then(value_as_f64_strict),
                b.and_then(value_as_f64_strict),
            ) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => display_value(a)
                    .to_lowercase()
                    .cmp(&display_value(b).to_lowercase()),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

// Sorting only treats genuine JSON numbers numerically; numeric-looking
// strings keep string order so mixed columns stay predictable.
fn value_as_f64_strict(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Stable sort by the active sort key. No-op when sort is `None`.
pub fn sort_rows(rows: &mut [Row], sort: &Option<(String, SortOrder)>) {
    if let Some((key, order)) = sort {
        rows.sort_by(|a, b| compare_values(a.get(key), b.get(key), *order));
    }
}

/// Total pages for a filtered row count; at least 1 even when empty.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 {
        1
    } else {
        count.div_ceil(page_size)
    }
}

/// Slice one page out of the prepared row list. `page` is clamped so a
/// stale page number (rows shrank under us) still yields the last page.
pub fn page_slice(rows: &[Row], page: usize, page_size: usize) -> Vec<Row> {
    let pages = total_pages(rows.len(), page_size);
    let page = page.clamp(1, pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    rows.get(start..end).unwrap_or(&[]).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::dynamic_table::schema::FilterPredicate;
    use serde_json::json;
    use std::sync::Arc;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().expect("row literal").clone()
    }

    fn columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("name", "Name"),
            TableColumn::new("age", "Age").filter_kind(FilterKind::Number),
        ]
    }

    fn people() -> Vec<Row> {
        vec![
            row(json!({"id": 1, "name": "Ann", "age": 30})),
            row(json!({"id": 2, "name": "Bob", "age": 25})),
        ]
    }

    #[test]
    fn test_column_filters_are_anded_in_either_order() {
        let cols = columns();
        let rows = people();

        let mut filters = HashMap::new();
        filters.insert("name".to_string(), "a".to_string());
        filters.insert("age".to_string(), "30".to_string());

        let result = filter_rows(&rows, &cols, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], json!("Ann"));

        // Same outcome when the filters were applied through the state
        // machine in the opposite order.
        let mut state = TableState::new(&cols);
        state.set_filter("age", "30".to_string());
        state.set_filter("name", "a".to_string());
        let result = filter_rows(&rows, &cols, &state.filters, &state.search);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], json!("Ann"));
    }

    #[test]
    fn test_select_filter_is_exact_case_insensitive() {
        let cols = vec![TableColumn::new("status", "Status").select_filter(vec![
            ("open".to_string(), "Open".to_string()),
            ("closed".to_string(), "Closed".to_string()),
        ])];
        let rows = vec![
            row(json!({"status": "OPEN"})),
            row(json!({"status": "CLOSED"})),
        ];
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), "open".to_string());

        let result = filter_rows(&rows, &cols, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["status"], json!("OPEN"));
    }

    #[test]
    fn test_date_filter_is_prefix_match() {
        let col = TableColumn::new("day", "Day").filter_kind(FilterKind::Date);
        assert!(column_filter_matches(
            &col,
            Some(&json!("2026-03-14")),
            "2026-03"
        ));
        assert!(!column_filter_matches(
            &col,
            Some(&json!("2026-03-14")),
            "03-14"
        ));
    }

    #[test]
    fn test_filter_predicate_overrides_builtin_matching() {
        // Digit-normalized prefix match: "14032026" matches "14.03.2026".
        let predicate: FilterPredicate = Arc::new(|value, filter, _| {
            let digits: String = display_value(value)
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            let wanted: String = filter.chars().filter(char::is_ascii_digit).collect();
            !wanted.is_empty() && digits.starts_with(&wanted)
        });
        let col = TableColumn::new("date", "Date")
            .filter_kind(FilterKind::Date)
            .filter_predicate(predicate);

        assert!(column_filter_matches(
            &col,
            Some(&json!("14.03.2026")),
            "14.03"
        ));
        assert!(column_filter_matches(
            &col,
            Some(&json!("14.03.2026")),
            "1403"
        ));
        assert!(!column_filter_matches(
            &col,
            Some(&json!("14.03.2026")),
            "15"
        ));
    }

    #[test]
    fn test_search_is_anded_with_column_filters() {
        let cols = columns();
        let rows = people();
        let mut filters = HashMap::new();
        filters.insert("age".to_string(), "30".to_string());

        // Row passes the age filter but not the search.
        assert!(filter_rows(&rows, &cols, &filters, "bob").is_empty());
        // Search matches any field, case-insensitively.
        assert_eq!(filter_rows(&rows, &cols, &filters, "aNn").len(), 1);
    }

    #[test]
    fn test_sort_places_nulls_last_in_both_directions() {
        let mut rows = vec![
            row(json!({"v": 2})),
            row(json!({"v": null})),
            row(json!({"v": 1})),
        ];

        sort_rows(&mut rows, &Some(("v".to_string(), SortOrder::Asc)));
        let asc: Vec<_> = rows.iter().map(|r| r["v"].clone()).collect();
        assert_eq!(asc, vec![json!(1), json!(2), json!(null)]);

        sort_rows(&mut rows, &Some(("v".to_string(), SortOrder::Desc)));
        let desc: Vec<_> = rows.iter().map(|r| r["v"].clone()).collect();
        assert_eq!(desc, vec![json!(2), json!(1), json!(null)]);
    }

    #[test]
    fn test_missing_field_sorts_like_null() {
        let mut rows = vec![row(json!({})), row(json!({"v": "a"}))];
        sort_rows(&mut rows, &Some(("v".to_string(), SortOrder::Asc)));
        assert_eq!(rows[0]["v"], json!("a"));
    }

    #[test]
    fn test_strings_sort_case_insensitively() {
        let mut rows = vec![
            row(json!({"name": "bob"})),
            row(json!({"name": "Ann"})),
            row(json!({"name": "carl"})),
        ];
        sort_rows(&mut rows, &Some(("name".to_string(), SortOrder::Asc)));
        let names: Vec<_> = rows.iter().map(|r| r["name"].clone()).collect();
        assert_eq!(names, vec![json!("Ann"), json!("bob"), json!("carl")]);
    }

    #[test]
    fn test_sort_toggle_cycles_asc_desc_none() {
        let cols = columns();
        let mut state = TableState::new(&cols);

        state.toggle_sort("name");
        assert_eq!(state.sort, Some(("name".to_string(), SortOrder::Asc)));
        state.toggle_sort("name");
        assert_eq!(state.sort, Some(("name".to_string(), SortOrder::Desc)));
        state.toggle_sort("name");
        assert_eq!(state.sort, None);
    }

    #[test]
    fn test_sorting_another_column_restarts_at_asc() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.toggle_sort("name");
        state.toggle_sort("age");
        assert_eq!(state.sort, Some(("age".to_string(), SortOrder::Asc)));
    }

    #[test]
    fn test_page_navigation_clamps() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.set_page_size(10);

        // 25 filtered rows / size 10 → 3 pages.
        let pages = total_pages(25, state.page_size);
        assert_eq!(pages, 3);

        state.set_page(10, pages);
        assert_eq!(state.page, 3);
        state.set_page(0, pages);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_filter_sort_and_page_size_reset_page() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.set_page(5, 10);
        state.set_filter("name", "a".to_string());
        assert_eq!(state.page, 1);

        state.set_page(5, 10);
        state.toggle_sort("name");
        assert_eq!(state.page, 1);

        state.set_page(5, 10);
        state.set_page_size(25);
        assert_eq!(state.page, 1);

        state.set_page(5, 10);
        state.set_search("x".to_string());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_outside_option_set_is_rejected() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.set_page_size(33);
        assert_eq!(state.page_size, PAGE_SIZE_OPTIONS[0]);
    }

    #[test]
    fn test_page_slice_takes_the_requested_window() {
        let rows: Vec<Row> = (0..25).map(|i| row(json!({"n": i}))).collect();
        let slice = page_slice(&rows, 3, 10);
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[0]["n"], json!(20));

        // Stale page numbers fall back to the last page.
        let slice = page_slice(&rows, 9, 10);
        assert_eq!(slice[0]["n"], json!(20));
    }

    #[test]
    fn test_removed_column_state_is_pruned_and_readd_gets_defaults() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.set_filter("age", "30".to_string());
        state.widths.insert("age".to_string(), 321.0);
        state.toggle_sort("age");

        let only_name = vec![TableColumn::new("name", "Name")];
        state.sync_columns(&only_name);
        assert!(!state.filters.contains_key("age"));
        assert!(!state.widths.contains_key("age"));
        assert!(state.sort.is_none());
        assert_eq!(state.visible, vec!["name".to_string()]);

        // Re-adding the same key yields fresh defaults, not the old 321px.
        state.sync_columns(&columns());
        assert_eq!(state.width_of("age"), DEFAULT_COLUMN_WIDTH);
        assert!(state.is_visible("age"));
    }

    #[test]
    fn test_surviving_columns_keep_customizations() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.widths.insert("name".to_string(), 250.0);
        state.set_filter("name", "a".to_string());

        state.sync_columns(&cols);
        assert_eq!(state.width_of("name"), 250.0);
        assert_eq!(state.filters.get("name"), Some(&"a".to_string()));
    }

    #[test]
    fn test_hidden_column_keeps_width_and_filter_state() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.set_filter("age", "30".to_string());
        state.widths.insert("age".to_string(), 200.0);

        state.toggle_column("age", &cols);
        assert!(!state.is_visible("age"));
        assert_eq!(state.filters.get("age"), Some(&"30".to_string()));
        assert_eq!(state.width_of("age"), 200.0);

        // Hidden state survives a descriptor resync.
        state.sync_columns(&cols);
        assert!(!state.is_visible("age"));

        state.toggle_column("age", &cols);
        assert!(state.is_visible("age"));
        assert_eq!(state.width_of("age"), 200.0);
        // Descriptor order is preserved.
        assert_eq!(state.visible, vec!["name".to_string(), "age".to_string()]);
    }

    #[test]
    fn test_resize_respects_min_width_floor() {
        let cols = vec![TableColumn::new("name", "Name").min_width(120.0)];
        let mut state = TableState::new(&cols);
        assert_eq!(state.width_of("name"), 120.0);

        state.begin_resize(&cols[0], 500.0);
        state.resize_to(560.0);
        assert_eq!(state.width_of("name"), 180.0);

        // Dragging far left clamps at the floor.
        state.resize_to(100.0);
        assert_eq!(state.width_of("name"), 120.0);

        state.end_resize();
        assert!(state.resize.is_none());
    }

    #[test]
    fn test_only_one_resize_at_a_time() {
        let cols = columns();
        let mut state = TableState::new(&cols);
        state.begin_resize(&cols[0], 10.0);
        state.begin_resize(&cols[1], 99.0);
        assert_eq!(state.resize.as_ref().unwrap().key, "name");
    }

    #[test]
    fn test_default_width_prefers_width_then_min_width() {
        let cols = vec![
            TableColumn::new("a", "A").width(300.0).min_width(100.0),
            TableColumn::new("b", "B").min_width(90.0),
            TableColumn::new("c", "C"),
        ];
        let state = TableState::new(&cols);
        assert_eq!(state.width_of("a"), 300.0);
        assert_eq!(state.width_of("b"), 90.0);
        assert_eq!(state.width_of("c"), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_number_filter_is_exact() {
        let col = TableColumn::new("age", "Age").filter_kind(FilterKind::Number);
        assert!(column_filter_matches(&col, Some(&json!(30)), "30"));
        assert!(column_filter_matches(&col, Some(&json!("30")), "30"));
        assert!(!column_filter_matches(&col, Some(&json!(300)), "30"));
        assert!(!column_filter_matches(&col, Some(&json!(null)), "30"));
        assert!(!column_filter_matches(&col, None, "30"));
    }
}
