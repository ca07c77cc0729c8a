//! Condition and tree validation.
//!
//! `validate_condition` checks a single condition against its column's filter
//! type; `validate_groups` walks a whole condition tree and additionally
//! surfaces structural problems (dangling fields, operators outside the
//! column's allowed set). Both are pure and never mutate their input.

use chrono::{NaiveDate, NaiveDateTime};
use uniquery_model::{FilterCondition, FilterGroup, FilterOperator, FilterType, FilterValue};

use crate::error::ConditionError;
use crate::operators::allowed_operators;
use crate::schema::{ColumnDef, ColumnSet};

/// Check whether a single condition is well-formed for its column.
///
/// Rules are evaluated in order; the first failure wins:
/// 1. value-less operators are always valid, whatever `value` holds;
/// 2. numeric `between` accepts open bounds and fails only when both are
///    absent;
/// 3. date `between` requires two well-formed bounds;
/// 4. `in`/`not_in` require a non-empty selection;
/// 5. every other operator requires a scalar value that is not an empty
///    string.
pub fn validate_condition(
    condition: &FilterCondition,
    column: &ColumnDef,
) -> Result<(), ConditionError> {
    let filter_type = column.inferred_type();
    let operator = condition.operator;

    // Rule 1: complete predicates ignore the value entirely.
    if !operator.requires_value() {
        return Ok(());
    }

    // Rule 2: numeric between tolerates one open bound.
    if filter_type == FilterType::Number && operator == FilterOperator::Between {
        return match &condition.value {
            Some(FilterValue::NumberRange { low: None, high: None }) => {
                Err(ConditionError::OpenRange)
            }
            Some(FilterValue::NumberRange { .. }) => Ok(()),
            Some(_) => Err(ConditionError::WrongShape("number range")),
            None => Err(ConditionError::ValueRequired),
        };
    }

    // Rule 3: date ranges need both bounds, well-formed.
    if matches!(filter_type, FilterType::Date | FilterType::DateRange)
        && operator == FilterOperator::Between
    {
        return match &condition.value {
            Some(FilterValue::DateRange { start, end }) => {
                for bound in [start, end] {
                    if bound.is_empty() {
                        return Err(ConditionError::BothBoundsRequired);
                    }
                    if !is_well_formed_date(bound) {
                        return Err(ConditionError::MalformedDate(bound.clone()));
                    }
                }
                Ok(())
            }
            Some(_) => Err(ConditionError::WrongShape("date range")),
            None => Err(ConditionError::BothBoundsRequired),
        };
    }

    // Rule 4: membership needs at least one selection.
    if filter_type == FilterType::Select && operator.is_membership() {
        return match &condition.value {
            Some(FilterValue::StringList(values)) if values.is_empty() => {
                Err(ConditionError::EmptySelection)
            }
            Some(FilterValue::StringList(_)) => Ok(()),
            Some(_) => Err(ConditionError::WrongShape("selection list")),
            None => Err(ConditionError::ValueRequired),
        };
    }

    // Rule 5: scalar operators need a present, non-empty scalar.
    match &condition.value {
        None => Err(ConditionError::ValueRequired),
        Some(value) if value.is_empty_string() => Err(ConditionError::ValueRequired),
        Some(value) if !value.is_scalar() => Err(ConditionError::WrongShape("scalar")),
        Some(_) => Ok(()),
    }
}

/// Accept `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`.
fn is_well_formed_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
}

/// One failed condition in a validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionFailure {
    /// Id of the group the condition sits in.
    pub group_id: String,
    /// Id of the failing condition.
    pub condition_id: String,
    /// The condition's field, for display.
    pub field: String,
    /// Why the condition failed.
    pub error: ConditionError,
}

/// Result of validating a whole condition tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Every failing condition, in tree order.
    pub failures: Vec<ConditionFailure>,
}

impl ValidationReport {
    /// Whether every condition in the tree passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Look up the failure for one condition, if any.
    pub fn failure_for(&self, condition_id: &str) -> Option<&ConditionFailure> {
        self.failures.iter().find(|f| f.condition_id == condition_id)
    }
}

/// Validate every condition in a group tree against the current schema.
///
/// On top of the per-condition rules this surfaces structural errors: a field
/// that no longer exists on the schema (persistent failure, never
/// auto-deleted) and an operator outside the column's allowed set.
pub fn validate_groups(groups: &[FilterGroup], columns: &ColumnSet) -> ValidationReport {
    let mut report = ValidationReport::default();
    for group in groups {
        validate_group_into(group, columns, &mut report);
    }
    report
}

fn validate_group_into(group: &FilterGroup, columns: &ColumnSet, report: &mut ValidationReport) {
    for condition in &group.conditions {
        let result = match columns.get(&condition.field) {
            None => Err(ConditionError::UnknownField(condition.field.clone())),
            Some(column) => {
                if !allowed_operators(column.inferred_type()).contains(&condition.operator) {
                    Err(ConditionError::OperatorNotAllowed)
                } else {
                    validate_condition(condition, column)
                }
            }
        };
        if let Err(error) = result {
            report.failures.push(ConditionFailure {
                group_id: group.id.clone(),
                condition_id: condition.id.clone(),
                field: condition.field.clone(),
                error,
            });
        }
    }
    for nested in &group.groups {
        validate_group_into(nested, columns, report);
    }
}
