//! Column descriptors for [`DynamicTable`](super::DynamicTable).
//!
//! A page authors a `Vec<TableColumn>` as plain data and hands it to the
//! table together with the row list. Everything the table does (filtering,
//! sorting, widths, visibility) is keyed by `TableColumn::key`.

use std::sync::Arc;

use leptos::prelude::AnyView;
use serde_json::Value;

/// One table row: an untyped field-name → value map.
pub type Row = serde_json::Map<String, Value>;

/// Serialize a list of DTOs into table rows. Items that do not serialize
/// to a JSON object are skipped.
pub fn rows_from<T: serde::Serialize>(items: &[T]) -> Vec<Row> {
    items
        .iter()
        .filter_map(|item| match serde_json::to_value(item) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect()
}

/// Custom filter matcher. Receives the row's raw value (None when the field
/// is missing), the active filter text and the column descriptor, and fully
/// replaces the built-in matching for that column.
pub type FilterPredicate = Arc<dyn Fn(Option<&Value>, &str, &TableColumn) -> bool + Send + Sync>;

/// Custom cell renderer: raw value plus the whole row.
pub type CellRenderer = Arc<dyn Fn(Option<&Value>, &Row) -> AnyView + Send + Sync>;

/// Renders the per-row actions cell (view/edit/delete buttons).
pub type RowActionsRenderer = Arc<dyn Fn(&Row) -> AnyView + Send + Sync>;

/// Built-in filter matching semantics. A closed set: adding a new kind
/// forces every `match` over it to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Text,
    /// Exact numeric equality.
    Number,
    /// Case-insensitive exact match against the option value.
    Select,
    /// Case-insensitive string prefix match.
    Date,
}

/// Filter configuration of one column.
#[derive(Clone)]
pub struct ColumnFilter {
    pub kind: FilterKind,
    /// (value, label) pairs; meaningful for `FilterKind::Select` only.
    pub options: Vec<(String, String)>,
    /// Overrides the built-in `kind` matching entirely when present.
    pub predicate: Option<FilterPredicate>,
}

impl ColumnFilter {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
            predicate: None,
        }
    }
}

/// Static configuration of one table column.
#[derive(Clone)]
pub struct TableColumn {
    /// Row field this column reads. Must be unique within a column list.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Initial width in pixels; falls back to `min_width`, then 160.
    pub width: Option<f64>,
    /// Lower bound for resizing, also the default width when `width` is None.
    pub min_width: Option<f64>,
    /// Filter behavior; `None` renders no filter input for the column.
    pub filter: Option<ColumnFilter>,
    /// Custom cell renderer; default rendering is the value's string form.
    pub render: Option<CellRenderer>,
}

impl TableColumn {
    /// A text-filterable column (columns are filterable unless opted out).
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            min_width: None,
            filter: Some(ColumnFilter::new(FilterKind::Text)),
            render: None,
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filter = None;
        self
    }

    pub fn filter_kind(mut self, kind: FilterKind) -> Self {
        self.filter = Some(ColumnFilter::new(kind));
        self
    }

    /// Select filter with its option list. Options are required for
    /// `FilterKind::Select`; a select filter without options matches nothing
    /// the user can pick, so this is the only way to get one.
    pub fn select_filter(mut self, options: Vec<(String, String)>) -> Self {
        self.filter = Some(ColumnFilter {
            kind: FilterKind::Select,
            options,
            predicate: None,
        });
        self
    }

    pub fn filter_predicate(mut self, predicate: FilterPredicate) -> Self {
        let filter = self
            .filter
            .get_or_insert_with(|| ColumnFilter::new(FilterKind::Text));
        filter.predicate = Some(predicate);
        self
    }

    pub fn render_with(mut self, renderer: CellRenderer) -> Self {
        self.render = Some(renderer);
        self
    }
}
