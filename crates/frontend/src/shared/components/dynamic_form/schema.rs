//! Form descriptors for [`DynamicForm`](super::DynamicForm).
//!
//! A page authors a `FormConfig` (sections of fields, plus a mode and
//! initial data) and hands it to the form together with a submit handler.
//! Field and section visibility can depend on the live form data through
//! `condition` callbacks, which is what makes dependent-field forms work.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::{AnyView, Callback};
use serde_json::Value;

/// The assembled form value map, field name → value.
pub type FormData = serde_json::Map<String, Value>;

/// Visibility gate evaluated against the current form data.
pub type Condition = Arc<dyn Fn(&FormData) -> bool + Send + Sync>;

/// Custom per-field validator; `Some(message)` flags an error.
pub type FieldValidator = Arc<dyn Fn(&Value, &FormData) -> Option<String> + Send + Sync>;

/// Custom edit-mode renderer for `FieldKind::Custom`.
pub type FieldRenderer = Arc<dyn Fn(&Value, Callback<Value>, &FormData) -> AnyView + Send + Sync>;

/// Custom view-mode renderer for `FieldKind::Custom`.
pub type ViewRenderer = Arc<dyn Fn(&Value, &FormData) -> AnyView + Send + Sync>;

/// Future returned by the caller's submit handler.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Caller-supplied submit handler. Receives the full value map; the form
/// itself never persists anything.
pub type SubmitHandler = Arc<dyn Fn(FormData) -> SubmitFuture + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    /// Read-only: every field renders as display text, validation and
    /// submission are unreachable.
    View,
}

/// Input widget selector. A closed set dispatched exhaustively; adding a
/// kind is a compile-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    DatetimeLocal,
    Time,
    Month,
    File,
    Color,
    Range,
    Custom,
}

impl FieldKind {
    /// HTML `type` attribute for input-element kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Date => "date",
            FieldKind::DatetimeLocal => "datetime-local",
            FieldKind::Time => "time",
            FieldKind::Month => "month",
            FieldKind::File => "file",
            FieldKind::Color => "color",
            FieldKind::Range => "range",
            // Not rendered through a plain <input>.
            FieldKind::Textarea
            | FieldKind::Select
            | FieldKind::Checkbox
            | FieldKind::Radio
            | FieldKind::Custom => "text",
        }
    }

    /// Value used when neither initial data nor a default is supplied.
    pub fn empty_value(&self) -> Value {
        match self {
            FieldKind::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Range)
    }

    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Email
                | FieldKind::Password
                | FieldKind::Tel
                | FieldKind::Url
                | FieldKind::Textarea
        )
    }
}

/// Static configuration of one form field.
#[derive(Clone)]
pub struct FormField {
    /// Unique within its section. Array items address their fields with
    /// composite names `"<array_field>[<index>].<name>"`.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub default_value: Option<Value>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub read_only: bool,
    /// (value, label) pairs for Select/Radio.
    pub options: Vec<(String, String)>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub validate: Option<FieldValidator>,
    pub condition: Option<Condition>,
    pub hide_in_view: bool,
    pub full_width: bool,
    pub render: Option<FieldRenderer>,
    pub render_view: Option<ViewRenderer>,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            default_value: None,
            placeholder: None,
            disabled: false,
            read_only: false,
            options: Vec::new(),
            min: None,
            max: None,
            step: None,
            min_length: None,
            max_length: None,
            pattern: None,
            validate: None,
            condition: None,
            hide_in_view: false,
            full_width: false,
            render: None,
            render_view: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn options(mut self, options: Vec<(String, String)>) -> Self {
        self.options = options;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn validate_with(mut self, validator: FieldValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn hide_in_view(mut self) -> Self {
        self.hide_in_view = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn render_with(mut self, renderer: FieldRenderer) -> Self {
        self.render = Some(renderer);
        self
    }

    pub fn render_view_with(mut self, renderer: ViewRenderer) -> Self {
        self.render_view = Some(renderer);
        self
    }
}

/// Section behavior: a plain field grid or a repeatable group.
#[derive(Clone)]
pub enum SectionKind {
    Standard,
    Array {
        /// Name of the array-valued form field the section repeats over.
        array_field: String,
        /// Heading of each item ("Line", "Contact", ...), numbered.
        item_label: String,
        add_button_label: String,
        /// Appended verbatim on "add".
        default_item: FormData,
    },
}

#[derive(Clone)]
pub struct FormSection {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: SectionKind,
    pub fields: Vec<FormField>,
    pub condition: Option<Condition>,
    /// CSS class override for the field grid.
    pub grid_cols: Option<String>,
}

impl FormSection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            kind: SectionKind::Standard,
            fields: Vec::new(),
            condition: None,
            grid_cols: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn fields(mut self, fields: Vec<FormField>) -> Self {
        self.fields = fields;
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn grid_cols(mut self, class: impl Into<String>) -> Self {
        self.grid_cols = Some(class.into());
        self
    }

    pub fn array(
        mut self,
        array_field: impl Into<String>,
        item_label: impl Into<String>,
        add_button_label: impl Into<String>,
        default_item: FormData,
    ) -> Self {
        self.kind = SectionKind::Array {
            array_field: array_field.into(),
            item_label: item_label.into(),
            add_button_label: add_button_label.into(),
            default_item,
        };
        self
    }
}

#[derive(Clone)]
pub struct FormConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub mode: FormMode,
    pub sections: Vec<FormSection>,
    pub initial_data: FormData,
}

impl FormConfig {
    pub fn new(title: impl Into<String>, mode: FormMode) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            mode,
            sections: Vec::new(),
            initial_data: FormData::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn sections(mut self, sections: Vec<FormSection>) -> Self {
        self.sections = sections;
        self
    }

    pub fn initial_data(mut self, data: FormData) -> Self {
        self.initial_data = data;
        self
    }
}
