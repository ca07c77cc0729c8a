//! Static operator catalog: which operators each filter type admits, in which
//! order, and how each operator is labelled.

use uniquery_model::{FilterOperator, FilterType};

use crate::schema::ColumnDef;

/// Operators for free-text columns.
pub const TEXT_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Contains,
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::StartsWith,
    FilterOperator::EndsWith,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// Operators for numeric columns.
pub const NUMBER_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::GreaterThan,
    FilterOperator::GreaterThanOrEqual,
    FilterOperator::LessThan,
    FilterOperator::LessThanOrEqual,
    FilterOperator::Between,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// Operators for single-date columns.
pub const DATE_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::Before,
    FilterOperator::After,
    FilterOperator::Today,
    FilterOperator::ThisWeek,
    FilterOperator::ThisMonth,
    FilterOperator::ThisYear,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// Operators for date-interval columns.
pub const DATE_RANGE_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Between,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// Operators for enumerated columns.
pub const SELECT_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::In,
    FilterOperator::NotIn,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// Operators for two-state columns.
pub const BOOLEAN_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

/// The ordered list of legal operators for a filter type.
///
/// Pure and stable: the order governs default UI ordering.
pub fn allowed_operators(filter_type: FilterType) -> &'static [FilterOperator] {
    match filter_type {
        FilterType::Text => TEXT_OPERATORS,
        FilterType::Number => NUMBER_OPERATORS,
        FilterType::Date => DATE_OPERATORS,
        FilterType::DateRange => DATE_RANGE_OPERATORS,
        FilterType::Select => SELECT_OPERATORS,
        FilterType::Boolean => BOOLEAN_OPERATORS,
    }
}

/// The operator a freshly created condition starts with: the first entry of
/// the type's allowed list, so a new condition is never outside its own legal
/// set.
pub fn default_operator(filter_type: FilterType) -> FilterOperator {
    allowed_operators(filter_type)[0]
}

/// The ordered list of legal operators for a column, via its inferred type.
pub fn column_operators(column: &ColumnDef) -> &'static [FilterOperator] {
    allowed_operators(column.inferred_type())
}

/// Human-readable label of an operator.
///
/// The match is exhaustive, so every operator has a label by construction.
pub fn operator_label(operator: FilterOperator) -> &'static str {
    match operator {
        FilterOperator::Contains => "包含",
        FilterOperator::Equals => "等于",
        FilterOperator::NotEquals => "不等于",
        FilterOperator::StartsWith => "开头是",
        FilterOperator::EndsWith => "结尾是",
        FilterOperator::GreaterThan => "大于",
        FilterOperator::GreaterThanOrEqual => "大于等于",
        FilterOperator::LessThan => "小于",
        FilterOperator::LessThanOrEqual => "小于等于",
        FilterOperator::Between => "介于",
        FilterOperator::Before => "早于",
        FilterOperator::After => "晚于",
        FilterOperator::Today => "今天",
        FilterOperator::ThisWeek => "本周",
        FilterOperator::ThisMonth => "本月",
        FilterOperator::ThisYear => "今年",
        FilterOperator::In => "属于",
        FilterOperator::NotIn => "不属于",
        FilterOperator::IsEmpty => "为空",
        FilterOperator::IsNotEmpty => "不为空",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_operator_is_allowed() {
        for filter_type in FilterType::ALL {
            let ops = allowed_operators(filter_type);
            assert!(!ops.is_empty());
            assert!(ops.contains(&default_operator(filter_type)));
        }
    }

    #[test]
    fn test_every_operator_has_a_label() {
        for op in FilterOperator::ALL {
            assert!(!operator_label(op).is_empty());
        }
    }

    #[test]
    fn test_type_specific_defaults() {
        assert_eq!(default_operator(FilterType::Text), FilterOperator::Contains);
        assert_eq!(default_operator(FilterType::Number), FilterOperator::Equals);
        assert_eq!(default_operator(FilterType::DateRange), FilterOperator::Between);
        assert_eq!(default_operator(FilterType::Select), FilterOperator::Equals);
    }

    #[test]
    fn test_catalog_is_stable() {
        // Same column, same list, by reference
        let a = allowed_operators(FilterType::Number);
        let b = allowed_operators(FilterType::Number);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_membership_confined_to_select() {
        for filter_type in FilterType::ALL {
            let has_in = allowed_operators(filter_type).contains(&FilterOperator::In);
            assert_eq!(has_in, filter_type == FilterType::Select);
        }
    }
}
