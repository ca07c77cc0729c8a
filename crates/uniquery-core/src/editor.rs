//! Stateful orchestration of the condition tree and quick filters.
//!
//! The [`GroupEditor`] owns the canonical `Vec<FilterGroup>` tree plus the
//! quick-filter map and is the only thing that mutates them. Every mutation
//! addresses nodes by id, rewrites the owned tree, and hands callers owned
//! snapshots, so a previously exported tree is never changed behind a
//! caller's back.
//!
//! The field/operator/value transitions are exposed as pure functions
//! ([`change_condition_field`], [`change_condition_operator`],
//! [`change_condition_value`]) so the consistency rules — "a field switch
//! never carries a stale value", "a value-less operator never carries a
//! value" — live in exactly one testable place; the editor methods apply them
//! in-tree by condition id.

use std::collections::HashSet;

use tracing::{debug, error};
use uniquery_model::{
    FilterCondition, FilterConfig, FilterGroup, FilterOperator, FilterValue, GroupLogic,
    QuickFilters,
};

use crate::error::Error;
use crate::id::{IdGenerator, SessionIdGenerator};
use crate::operators::{allowed_operators, default_operator};
use crate::schema::ColumnSet;
use crate::validate::{validate_groups, ValidationReport};

/// Re-target a condition at a new field.
///
/// The new column's filter type and operator set are recomputed; the current
/// operator survives only if it is still legal, otherwise the new type's
/// default operator takes over. The value is always cleared: a value shaped
/// for the old field is almost never meaningful for the new one. Idempotent.
pub fn change_condition_field(
    condition: &FilterCondition,
    new_field: &str,
    columns: &ColumnSet,
) -> Result<FilterCondition, Error> {
    let column = columns
        .get(new_field)
        .ok_or_else(|| Error::UnknownColumn(new_field.to_string()))?;
    let filter_type = column.inferred_type();
    let ops = allowed_operators(filter_type);

    let operator = if ops.contains(&condition.operator) {
        condition.operator
    } else {
        default_operator(filter_type)
    };

    Ok(FilterCondition {
        id: condition.id.clone(),
        field: new_field.to_string(),
        operator,
        value: None,
        value_type: Some(filter_type),
    })
}

/// Switch a condition's operator.
///
/// Moving onto a value-less operator clears the value; otherwise the value is
/// preserved even if it becomes invalid — the validator flags it instead of
/// silently destroying the user's input.
pub fn change_condition_operator(
    condition: &FilterCondition,
    new_operator: FilterOperator,
) -> FilterCondition {
    let value = if new_operator.requires_value() {
        condition.value.clone()
    } else {
        None
    };
    FilterCondition {
        operator: new_operator,
        value,
        ..condition.clone()
    }
}

/// Assign a condition's value. No side effects on field or operator.
pub fn change_condition_value(
    condition: &FilterCondition,
    value: Option<FilterValue>,
) -> FilterCondition {
    FilterCondition {
        value,
        ..condition.clone()
    }
}

/// The stateful filter editor for one host table.
///
/// Holds the current column schema (refreshable via [`set_columns`]) and the
/// canonical filter state. An empty group list is the legitimate "no advanced
/// filters" state, indistinguishable from "no groups created yet".
///
/// [`set_columns`]: GroupEditor::set_columns
pub struct GroupEditor<G: IdGenerator = SessionIdGenerator> {
    columns: ColumnSet,
    groups: Vec<FilterGroup>,
    quick_filters: QuickFilters,
    ids: G,
    issued: HashSet<String>,
}

impl GroupEditor<SessionIdGenerator> {
    /// Create an editor with the default session id generator.
    pub fn new(columns: ColumnSet) -> Self {
        Self::with_id_generator(columns, SessionIdGenerator::new())
    }
}

impl<G: IdGenerator> GroupEditor<G> {
    /// Create an editor with an injected id generator.
    pub fn with_id_generator(columns: ColumnSet, ids: G) -> Self {
        Self {
            columns,
            groups: vec![],
            quick_filters: QuickFilters::new(),
            ids,
            issued: HashSet::new(),
        }
    }

    /// The current column schema.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Replace the column schema after a host refresh.
    ///
    /// Conditions referencing columns that disappeared stay in the tree and
    /// surface through [`validate`](GroupEditor::validate) as dangling-field
    /// failures; the user resolves them, never this editor.
    pub fn set_columns(&mut self, columns: ColumnSet) {
        self.columns = columns;
    }

    /// The current top-level groups.
    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    /// The current quick-filter selections.
    pub fn quick_filters(&self) -> &QuickFilters {
        &self.quick_filters
    }

    /// Whether no filters of either kind are active.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.quick_filters.is_empty()
    }

    /// An owned snapshot of the complete filter state.
    pub fn snapshot(&self) -> FilterConfig {
        FilterConfig {
            groups: self.groups.clone(),
            quick_filters: self.quick_filters.clone(),
        }
    }

    fn fresh_id(&mut self) -> String {
        let mut id = self.ids.next_id();
        if self.issued.contains(&id) {
            // A collision is a programming defect in the generator, not a
            // recoverable runtime condition.
            error!(%id, "id generator produced a duplicate id");
            debug_assert!(false, "duplicate filter id: {id}");
            id = format!("{id}-{}", self.issued.len());
        }
        self.issued.insert(id.clone());
        id
    }

    fn default_condition(&mut self) -> Result<FilterCondition, Error> {
        let column = self
            .columns
            .first_filterable()
            .ok_or(Error::NoFilterableColumns)?;
        let field = column.field.clone();
        let filter_type = column.inferred_type();
        let id = self.fresh_id();
        Ok(FilterCondition::new(id, field, default_operator(filter_type))
            .with_value_type(filter_type))
    }

    /// Append a new top-level AND group seeded with one default condition
    /// (first filterable column, its default operator, no value). Returns the
    /// new group's id.
    pub fn add_group(&mut self) -> Result<String, Error> {
        let condition = self.default_condition()?;
        let id = self.fresh_id();
        debug!(group = %id, "add filter group");
        self.groups
            .push(FilterGroup::new(id.clone()).with_condition(condition));
        Ok(id)
    }

    /// Create a nested group inside an existing group. Groups are only ever
    /// created top-down, which is what keeps the tree acyclic.
    pub fn add_nested_group(&mut self, parent_id: &str) -> Result<String, Error> {
        let condition = self.default_condition()?;
        let id = self.fresh_id();
        let parent = self
            .find_group_mut(parent_id)
            .ok_or_else(|| Error::UnknownGroup(parent_id.to_string()))?;
        debug!(group = %id, parent = %parent_id, "add nested filter group");
        parent
            .groups
            .push(FilterGroup::new(id.clone()).with_condition(condition));
        Ok(id)
    }

    /// Delete a group from the top-level list. Nested groups are removed
    /// through [`update_group`](GroupEditor::update_group) by the nested
    /// editor instance.
    pub fn remove_group(&mut self, group_id: &str) -> Result<(), Error> {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != group_id);
        if self.groups.len() == before {
            return Err(Error::UnknownGroup(group_id.to_string()));
        }
        debug!(group = %group_id, "remove filter group");
        Ok(())
    }

    /// Replace a top-level group by value (structural replacement only; the
    /// replacement's internal consistency is the caller's edit, checked at
    /// export time).
    pub fn update_group(&mut self, group_id: &str, new_group: FilterGroup) -> Result<(), Error> {
        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| Error::UnknownGroup(group_id.to_string()))?;
        // Absorb any ids the nested editor minted so session uniqueness
        // bookkeeping stays complete.
        let mut ids = Vec::new();
        new_group.collect_ids(&mut ids);
        self.issued.extend(ids);
        *slot = new_group;
        debug!(group = %group_id, "replace filter group");
        Ok(())
    }

    /// Toggle a group's AND/OR connective.
    pub fn set_group_logic(&mut self, group_id: &str, logic: GroupLogic) -> Result<(), Error> {
        let group = self
            .find_group_mut(group_id)
            .ok_or_else(|| Error::UnknownGroup(group_id.to_string()))?;
        group.logic = logic;
        Ok(())
    }

    /// Append a default condition to a group (top-level or nested). Returns
    /// the new condition's id.
    pub fn add_condition(&mut self, group_id: &str) -> Result<String, Error> {
        let condition = self.default_condition()?;
        let id = condition.id.clone();
        let group = self
            .find_group_mut(group_id)
            .ok_or_else(|| Error::UnknownGroup(group_id.to_string()))?;
        debug!(group = %group_id, condition = %id, "add filter condition");
        group.conditions.push(condition);
        Ok(id)
    }

    /// Delete a condition from a group.
    pub fn remove_condition(&mut self, group_id: &str, condition_id: &str) -> Result<(), Error> {
        let group = self
            .find_group_mut(group_id)
            .ok_or_else(|| Error::UnknownGroup(group_id.to_string()))?;
        let before = group.conditions.len();
        group.conditions.retain(|c| c.id != condition_id);
        if group.conditions.len() == before {
            return Err(Error::UnknownCondition(condition_id.to_string()));
        }
        debug!(group = %group_id, condition = %condition_id, "remove filter condition");
        Ok(())
    }

    /// Re-target a condition at a new field (see [`change_condition_field`]).
    pub fn set_condition_field(&mut self, condition_id: &str, new_field: &str) -> Result<(), Error> {
        let columns = self.columns.clone();
        let condition = self
            .find_condition_mut(condition_id)
            .ok_or_else(|| Error::UnknownCondition(condition_id.to_string()))?;
        *condition = change_condition_field(condition, new_field, &columns)?;
        debug!(condition = %condition_id, field = %new_field, "re-target filter condition");
        Ok(())
    }

    /// Switch a condition's operator (see [`change_condition_operator`]).
    pub fn set_condition_operator(
        &mut self,
        condition_id: &str,
        operator: FilterOperator,
    ) -> Result<(), Error> {
        let condition = self
            .find_condition_mut(condition_id)
            .ok_or_else(|| Error::UnknownCondition(condition_id.to_string()))?;
        *condition = change_condition_operator(condition, operator);
        Ok(())
    }

    /// Assign a condition's value (see [`change_condition_value`]).
    pub fn set_condition_value(
        &mut self,
        condition_id: &str,
        value: Option<FilterValue>,
    ) -> Result<(), Error> {
        let condition = self
            .find_condition_mut(condition_id)
            .ok_or_else(|| Error::UnknownCondition(condition_id.to_string()))?;
        *condition = change_condition_value(condition, value);
        Ok(())
    }

    /// Toggle one quick-filter value: absent values are added, present values
    /// removed; removing the last value drops the field entry.
    pub fn toggle_quick_filter(&mut self, field: &str, value: FilterValue) {
        let values = self.quick_filters.entry(field.to_string()).or_default();
        if let Some(pos) = values.iter().position(|v| *v == value) {
            values.remove(pos);
        } else {
            values.push(value);
        }
        if self.quick_filters.get(field).is_some_and(Vec::is_empty) {
            self.quick_filters.remove(field);
        }
    }

    /// Remove one quick-filter value, or the whole field entry when no
    /// specific value is given.
    pub fn clear_quick_filter(&mut self, field: &str, value: Option<&FilterValue>) {
        match value {
            Some(value) => {
                if let Some(values) = self.quick_filters.get_mut(field) {
                    values.retain(|v| v != value);
                    if values.is_empty() {
                        self.quick_filters.remove(field);
                    }
                }
            }
            None => {
                self.quick_filters.remove(field);
            }
        }
    }

    /// Reset quick filters and advanced groups together. Atomic and
    /// idempotent: there is no state in which one side is cleared and the
    /// other is not.
    pub fn clear_all(&mut self) {
        debug!("clear all filters");
        self.groups.clear();
        self.quick_filters.clear();
    }

    /// Validate every condition in the current tree against the current
    /// schema.
    pub fn validate(&self) -> ValidationReport {
        validate_groups(&self.groups, &self.columns)
    }

    /// Hand the filter state to the host query layer.
    ///
    /// Succeeds only when every condition validates; the host is entitled to
    /// assume it never receives a malformed condition.
    pub fn try_export(&self) -> Result<FilterConfig, ValidationReport> {
        let report = self.validate();
        if report.is_valid() {
            Ok(self.snapshot())
        } else {
            Err(report)
        }
    }

    fn find_group_mut(&mut self, group_id: &str) -> Option<&mut FilterGroup> {
        self.groups.iter_mut().find_map(|g| g.find_group_mut(group_id))
    }

    fn find_condition_mut(&mut self, condition_id: &str) -> Option<&mut FilterCondition> {
        self.groups
            .iter_mut()
            .find_map(|g| g.find_condition_mut(condition_id))
    }
}
