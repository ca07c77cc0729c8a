//! Closed filter-type and operator enums.

use serde::{Deserialize, Serialize};

/// The filter category of a column.
///
/// Every column resolves to exactly one filter type, which determines the
/// legal operators and the value shape for its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    /// Free-text column.
    Text,
    /// Numeric column (amounts, quantities, percentages).
    Number,
    /// Single date column.
    Date,
    /// Date interval column.
    DateRange,
    /// Column with an enumerated set of choices.
    Select,
    /// Two-state column (switch, flag).
    Boolean,
}

impl FilterType {
    /// All filter types, in declaration order.
    pub const ALL: [FilterType; 6] = [
        FilterType::Text,
        FilterType::Number,
        FilterType::Date,
        FilterType::DateRange,
        FilterType::Select,
        FilterType::Boolean,
    ];
}

/// A named comparison/membership test legal for one or more filter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Substring match.
    Contains,
    /// Exact equality.
    Equals,
    /// Negated equality.
    NotEquals,
    /// Prefix match.
    StartsWith,
    /// Suffix match.
    EndsWith,
    /// Strictly greater.
    GreaterThan,
    /// Greater or equal.
    GreaterThanOrEqual,
    /// Strictly less.
    LessThan,
    /// Less or equal.
    LessThanOrEqual,
    /// Inclusive range test.
    Between,
    /// Date strictly before.
    Before,
    /// Date strictly after.
    After,
    /// Date falls on the current day.
    Today,
    /// Date falls in the current week.
    ThisWeek,
    /// Date falls in the current month.
    ThisMonth,
    /// Date falls in the current year.
    ThisYear,
    /// Membership in a value set.
    In,
    /// Negated membership.
    NotIn,
    /// Value is absent.
    IsEmpty,
    /// Value is present.
    IsNotEmpty,
}

impl FilterOperator {
    /// All operators, in declaration order.
    pub const ALL: [FilterOperator; 20] = [
        FilterOperator::Contains,
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
        FilterOperator::GreaterThan,
        FilterOperator::GreaterThanOrEqual,
        FilterOperator::LessThan,
        FilterOperator::LessThanOrEqual,
        FilterOperator::Between,
        FilterOperator::Before,
        FilterOperator::After,
        FilterOperator::Today,
        FilterOperator::ThisWeek,
        FilterOperator::ThisMonth,
        FilterOperator::ThisYear,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::IsEmpty,
        FilterOperator::IsNotEmpty,
    ];

    /// Whether this operator takes an operand.
    ///
    /// Emptiness checks and the relative-date operators (`today`, `this_week`,
    /// `this_month`, `this_year`) are complete predicates on their own; a
    /// condition using one of them never carries a value.
    pub fn requires_value(&self) -> bool {
        !matches!(
            self,
            FilterOperator::IsEmpty
                | FilterOperator::IsNotEmpty
                | FilterOperator::Today
                | FilterOperator::ThisWeek
                | FilterOperator::ThisMonth
                | FilterOperator::ThisYear
        )
    }

    /// Whether this operator tests membership in a value set (`in`/`not_in`).
    pub fn is_membership(&self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::NotIn)
    }
}

/// Logical connective of a filter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupLogic {
    /// All conditions must hold.
    And,
    /// At least one condition must hold.
    Or,
}
