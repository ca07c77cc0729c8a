//! Core error types.

use thiserror::Error;

/// Errors from editor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No group with the given id exists in the tree.
    #[error("unknown group: {0}")]
    UnknownGroup(String),

    /// No condition with the given id exists in the tree.
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    /// The referenced column is not part of the current schema.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The schema exposes no filterable columns, so no default condition can
    /// be created.
    #[error("no filterable columns available")]
    NoFilterableColumns,
}

/// Why a single condition is not well-formed.
///
/// The `Display` output is the human-readable reason shown inline next to the
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// Scalar operator with no value, or an empty string.
    #[error("value required")]
    ValueRequired,

    /// Numeric `between` where both bounds are absent.
    #[error("at least one bound required for between")]
    OpenRange,

    /// Date `between` with a missing bound.
    #[error("both bounds required for between")]
    BothBoundsRequired,

    /// A date value that does not parse.
    #[error("malformed date: {0}")]
    MalformedDate(String),

    /// `in`/`not_in` with an empty choice list.
    #[error("at least one selection required")]
    EmptySelection,

    /// The value's variant does not fit the operator.
    #[error("expected {0} value")]
    WrongShape(&'static str),

    /// The condition references a column that no longer exists on the current
    /// schema. Surfaced persistently; the condition is never auto-deleted.
    #[error("field {0} does not exist on the current schema")]
    UnknownField(String),

    /// The operator is outside the allowed set for the column's filter type.
    #[error("operator not allowed for this column type")]
    OperatorNotAllowed,
}
