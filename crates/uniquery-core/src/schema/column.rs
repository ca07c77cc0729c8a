//! Column descriptors supplied by the host table.

use serde::{Deserialize, Serialize};
use uniquery_model::FilterType;

/// One enumerated choice of a select-like column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Raw stored value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl Choice {
    /// Create a choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A column descriptor as declared by the host table schema.
///
/// Read-only input to the filter core; the host refreshes the whole set
/// whenever its schema changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column identifier; columns without one (action/computed columns) are
    /// never filterable.
    pub field: String,
    /// Display title.
    pub title: String,
    /// Declared value kind from the host table (`date`, `digit`, `money`,
    /// `select`, `switch`, `text`, ...).
    #[serde(rename = "valueKind", default)]
    pub value_kind: String,
    /// Enumerated choices, in host order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// Whether the column participates in filtering.
    #[serde(default = "default_filterable")]
    pub filterable: bool,
    /// Explicit filter-type override; wins over kind inference.
    #[serde(rename = "filterType", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
}

fn default_filterable() -> bool {
    true
}

impl ColumnDef {
    /// Create a filterable text column.
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            value_kind: String::new(),
            choices: vec![],
            filterable: true,
            filter_type: None,
        }
    }

    /// Set the declared value kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.value_kind = kind.into();
        self
    }

    /// Add an enumerated choice.
    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    /// Set the enumerated choices wholesale.
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Exclude this column from filtering.
    pub fn hidden(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Force a filter type, bypassing kind inference.
    pub fn with_filter_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = Some(filter_type);
        self
    }

    /// The filter type of this column.
    ///
    /// Total: an explicit override wins; otherwise the declared kind maps to a
    /// type, an unrecognized kind with enumerated choices maps to `Select`,
    /// and everything else falls back to `Text` (fail-open).
    pub fn inferred_type(&self) -> FilterType {
        if let Some(filter_type) = self.filter_type {
            return filter_type;
        }
        match self.value_kind.as_str() {
            "date" | "dateTime" | "dateWeek" | "dateMonth" | "dateYear" => FilterType::Date,
            "dateRange" | "dateTimeRange" => FilterType::DateRange,
            "digit" | "money" | "number" | "percent" | "progress" => FilterType::Number,
            "select" | "radio" | "checkbox" => FilterType::Select,
            "switch" | "boolean" => FilterType::Boolean,
            _ if !self.choices.is_empty() => FilterType::Select,
            _ => FilterType::Text,
        }
    }

    /// Resolve a raw stored value through the enumerated choices.
    pub fn choice_label(&self, raw: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.value == raw)
            .map(|c| c.label.as_str())
    }
}
