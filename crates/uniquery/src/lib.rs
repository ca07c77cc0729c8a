//! Uniquery - Advanced filter and query-condition building for data tables.
//!
//! Describe a table's columns once and get typed filter conditions out:
//! the editor knows which operators each column admits, repairs conditions
//! when the user switches fields, validates values before they reach the
//! query layer, and renders an active-filter summary with choice labels
//! resolved.
//!
//! ```
//! use uniquery::{ColumnDef, ColumnSet, GroupEditor};
//!
//! let columns = ColumnSet::new(vec![
//!     ColumnDef::new("order_no", "单号"),
//!     ColumnDef::new("status", "状态")
//!         .with_kind("select")
//!         .with_choice("draft", "草稿"),
//! ]);
//!
//! let mut editor = GroupEditor::new(columns);
//! let group = editor.add_group().unwrap();
//! let cond = editor.groups()[0].conditions[0].id.clone();
//! editor.set_condition_value(&cond, Some("SO-2024".into())).unwrap();
//!
//! let config = editor.try_export().unwrap();
//! assert_eq!(config.groups[0].id, group);
//! ```

pub use uniquery_core::{
    active_filter_count, active_filters, allowed_operators, change_condition_field,
    change_condition_operator, change_condition_value, column_operators, default_operator,
    display_value, has_active_filters, operator_label, validate_condition, validate_groups,
    ActiveFilterEntry, Choice, ColumnDef, ColumnSet, ConditionError, ConditionFailure, Error,
    GroupEditor, IdGenerator, RemoveAction, SequentialIdGenerator, SessionIdGenerator,
    ValidationReport,
};
pub use uniquery_model::{
    FilterCondition, FilterConfig, FilterGroup, FilterOperator, FilterType, FilterValue,
    GroupLogic, QuickFilters,
};

/// Re-export the model crate for wire-type access.
pub use uniquery_model as model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_surface() {
        let columns = ColumnSet::new(vec![ColumnDef::new("name", "名称")]);
        let mut editor = GroupEditor::new(columns);
        editor.add_group().unwrap();
        assert_eq!(editor.groups().len(), 1);
        assert!(!editor.is_empty());
    }
}
