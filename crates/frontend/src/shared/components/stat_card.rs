use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its numeric value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Integer => format_thousands(val as i64),
        ValueFormat::Money => {
            let int_part = val.trunc() as i64;
            let frac = ((val - int_part as f64).abs() * 100.0).round() as i64;
            format!("{}.{:02}", format_thousands(int_part), frac)
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "--".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                {icon(icon_name)}
            </div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1\u{a0}234\u{a0}567");
        assert_eq!(format_value(0.0, ValueFormat::Integer), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_value(1234.5, ValueFormat::Money), "1\u{a0}234.50");
        assert_eq!(format_value(-12.34, ValueFormat::Money), "-12.34");
    }
}
