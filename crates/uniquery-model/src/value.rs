//! Operator-dependent condition values.

use serde::{Deserialize, Serialize};

/// A value carried by a filter condition.
///
/// The legal shape depends on the condition's operator: scalar operators carry
/// a scalar variant, `in`/`not_in` carry a [`FilterValue::StringList`], numeric
/// `between` carries a [`FilterValue::NumberRange`] (either bound may be open),
/// and date-range `between` carries a [`FilterValue::DateRange`]. The condition
/// validator enforces these shapes; this enum only represents them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterValue {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar (also the raw form of select choices and dates).
    String(String),
    /// Multiple select choices.
    StringList(Vec<String>),
    /// Numeric range with optionally open bounds.
    NumberRange {
        /// Lower bound, inclusive; `None` means open-ended.
        low: Option<f64>,
        /// Upper bound, inclusive; `None` means open-ended.
        high: Option<f64>,
    },
    /// Date interval; both endpoints are date strings.
    DateRange {
        /// Start of the interval.
        start: String,
        /// End of the interval.
        end: String,
    },
}

impl FilterValue {
    /// Check if this value is a scalar (not a list or range).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FilterValue::Bool(_)
                | FilterValue::Int(_)
                | FilterValue::Float(_)
                | FilterValue::String(_)
        )
    }

    /// Check if this value is an empty string.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, FilterValue::String(s) if s.is_empty())
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as f64 (integers widen).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FilterValue::Int(i) => Some(*i as f64),
            FilterValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a choice list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::StringList(vs) => Some(vs),
            _ => None,
        }
    }

    /// The raw display form of a scalar, without choice-label resolution.
    pub fn raw_text(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Int(i) => i.to_string(),
            FilterValue::Float(f) => f.to_string(),
            FilterValue::String(s) => s.clone(),
            FilterValue::StringList(vs) => vs.join(", "),
            FilterValue::NumberRange { low, high } => format!(
                "{} ~ {}",
                low.map(|n| n.to_string()).unwrap_or_default(),
                high.map(|n| n.to_string()).unwrap_or_default()
            ),
            FilterValue::DateRange { start, end } => format!("{start} ~ {end}"),
        }
    }
}

// Conversion implementations
impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Float(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::String(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::String(v.to_string())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::StringList(v)
    }
}

impl From<(Option<f64>, Option<f64>)> for FilterValue {
    fn from((low, high): (Option<f64>, Option<f64>)) -> Self {
        FilterValue::NumberRange { low, high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(FilterValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FilterValue::Int(42).as_f64(), Some(42.0)); // Widening conversion
        assert_eq!(FilterValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(FilterValue::String("hello".into()).as_str(), Some("hello"));

        let list = FilterValue::StringList(vec!["a".into(), "b".into()]);
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));

        assert!(FilterValue::String(String::new()).is_empty_string());
        assert!(!FilterValue::String("x".into()).is_empty_string());
    }

    #[test]
    fn test_scalar_classification() {
        assert!(FilterValue::Bool(false).is_scalar());
        assert!(FilterValue::Int(1).is_scalar());
        assert!(!FilterValue::StringList(vec![]).is_scalar());
        assert!(!FilterValue::NumberRange { low: None, high: None }.is_scalar());
    }

    #[test]
    fn test_raw_text() {
        assert_eq!(FilterValue::Int(100).raw_text(), "100");
        // Whole floats render without a trailing fraction
        assert_eq!(FilterValue::Float(100.0).raw_text(), "100");
        assert_eq!(FilterValue::Float(99.5).raw_text(), "99.5");
        assert_eq!(
            FilterValue::NumberRange { low: Some(100.0), high: None }.raw_text(),
            "100 ~ "
        );
        assert_eq!(
            FilterValue::DateRange { start: "2024-01-01".into(), end: "2024-01-31".into() }
                .raw_text(),
            "2024-01-01 ~ 2024-01-31"
        );
    }

    #[test]
    fn test_value_conversions() {
        let v: FilterValue = true.into();
        assert_eq!(v, FilterValue::Bool(true));

        let v: FilterValue = "draft".into();
        assert_eq!(v, FilterValue::String("draft".into()));

        let v: FilterValue = (Some(1.0), None).into();
        assert_eq!(v, FilterValue::NumberRange { low: Some(1.0), high: None });
    }

    #[test]
    fn test_serialization_roundtrip() {
        let values = vec![
            FilterValue::Bool(true),
            FilterValue::Int(-42),
            FilterValue::Float(3.5),
            FilterValue::String("草稿".into()),
            FilterValue::StringList(vec!["a".into(), "b".into()]),
            FilterValue::NumberRange { low: Some(100.0), high: None },
            FilterValue::DateRange { start: "2024-01-01".into(), end: "2024-12-31".into() },
        ];

        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: FilterValue = serde_json::from_str(&json).unwrap();
            assert_eq!(value, back);
        }
    }
}
