//! Uniquery Core - Column introspection, validation, and filter editing.
//!
//! This crate provides the filter-building logic on top of the wire types
//! from `uniquery-model`.

pub mod editor;
pub mod error;
pub mod id;
pub mod operators;
pub mod preview;
pub mod schema;
pub mod validate;

pub use editor::{
    change_condition_field, change_condition_operator, change_condition_value, GroupEditor,
};
pub use error::{ConditionError, Error};
pub use id::{IdGenerator, SequentialIdGenerator, SessionIdGenerator};
pub use operators::{allowed_operators, column_operators, default_operator, operator_label};
pub use preview::{
    active_filter_count, active_filters, display_value, has_active_filters, ActiveFilterEntry,
    RemoveAction,
};
pub use schema::{Choice, ColumnDef, ColumnSet};
pub use validate::{validate_condition, validate_groups, ConditionFailure, ValidationReport};

/// Re-export model types.
pub use uniquery_model as model;
