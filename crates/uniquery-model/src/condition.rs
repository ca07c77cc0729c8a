//! Conditions, groups, and the combined filter configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::operator::{FilterOperator, FilterType, GroupLogic};
use crate::value::FilterValue;

/// Quick filters: single-field multi-value toggles, independent of the
/// advanced condition groups. Values within one field combine with OR, fields
/// combine with AND.
///
/// A `BTreeMap` keeps field iteration deterministic across serialization
/// round-trips.
pub type QuickFilters = BTreeMap<String, Vec<FilterValue>>;

/// One atomic predicate: field, operator, and operator-dependent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Opaque id, unique across the editor session.
    pub id: String,
    /// Column identifier this condition applies to.
    pub field: String,
    /// The comparison/membership test.
    pub operator: FilterOperator,
    /// Operand; `None` is the cleared state and the only legal state for
    /// value-less operators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
    /// Informational copy of the column's inferred filter type at the time the
    /// condition was created or last re-targeted.
    #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<FilterType>,
}

impl FilterCondition {
    /// Create a condition with no value.
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        operator: FilterOperator,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            operator,
            value: None,
            value_type: None,
        }
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the recorded filter type.
    pub fn with_value_type(mut self, value_type: FilterType) -> Self {
        self.value_type = Some(value_type);
        self
    }
}

/// A logical connective over an ordered list of conditions and nested groups.
///
/// Groups form a tree: the editor creates them top-down and never reparents
/// them, so a group can never contain itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Opaque id, unique across the editor session.
    pub id: String,
    /// Connective applied over this group's members.
    pub logic: GroupLogic,
    /// Conditions directly in this group.
    pub conditions: Vec<FilterCondition>,
    /// Nested sub-groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FilterGroup>,
}

impl FilterGroup {
    /// Create an empty AND group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            logic: GroupLogic::And,
            conditions: vec![],
            groups: vec![],
        }
    }

    /// Set the connective.
    pub fn with_logic(mut self, logic: GroupLogic) -> Self {
        self.logic = logic;
        self
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a nested group.
    pub fn with_group(mut self, group: FilterGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Total number of conditions, including nested groups.
    pub fn condition_count(&self) -> usize {
        self.conditions.len() + self.groups.iter().map(FilterGroup::condition_count).sum::<usize>()
    }

    /// Find a group by id in this subtree.
    pub fn find_group(&self, group_id: &str) -> Option<&FilterGroup> {
        if self.id == group_id {
            return Some(self);
        }
        self.groups.iter().find_map(|g| g.find_group(group_id))
    }

    /// Find a group by id in this subtree, mutably.
    pub fn find_group_mut(&mut self, group_id: &str) -> Option<&mut FilterGroup> {
        if self.id == group_id {
            return Some(self);
        }
        self.groups.iter_mut().find_map(|g| g.find_group_mut(group_id))
    }

    /// Find a condition by id in this subtree, mutably.
    pub fn find_condition_mut(&mut self, condition_id: &str) -> Option<&mut FilterCondition> {
        if let Some(cond) = self.conditions.iter_mut().find(|c| c.id == condition_id) {
            return Some(cond);
        }
        self.groups
            .iter_mut()
            .find_map(|g| g.find_condition_mut(condition_id))
    }

    /// Collect every group and condition id in this subtree.
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        for cond in &self.conditions {
            out.push(cond.id.clone());
        }
        for group in &self.groups {
            group.collect_ids(out);
        }
    }
}

/// The complete filter state handed to the host query layer: advanced
/// condition groups (implicit AND between top-level groups) plus the
/// quick-filter map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Top-level condition groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FilterGroup>,
    /// Quick-filter selections keyed by field.
    #[serde(rename = "quickFilters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub quick_filters: QuickFilters,
}

impl FilterConfig {
    /// Create an empty configuration (no filters active).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no filters are active at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.quick_filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_condition_builder() {
        let cond = FilterCondition::new("c1", "amount", FilterOperator::Between)
            .with_value((Some(100.0), None))
            .with_value_type(FilterType::Number);

        assert_eq!(cond.field, "amount");
        assert_eq!(cond.value, Some(FilterValue::NumberRange { low: Some(100.0), high: None }));
        assert_eq!(cond.value_type, Some(FilterType::Number));
    }

    #[test]
    fn test_group_tree_lookup() {
        let tree = FilterGroup::new("g1")
            .with_condition(FilterCondition::new("c1", "name", FilterOperator::Contains))
            .with_group(
                FilterGroup::new("g2")
                    .with_logic(GroupLogic::Or)
                    .with_condition(FilterCondition::new("c2", "status", FilterOperator::Equals)),
            );

        assert_eq!(tree.condition_count(), 2);
        assert!(tree.find_group("g2").is_some());
        assert!(tree.find_group("g3").is_none());

        let mut tree = tree;
        let nested = tree.find_condition_mut("c2").unwrap();
        assert_eq!(nested.field, "status");

        let mut ids = Vec::new();
        tree.collect_ids(&mut ids);
        assert_eq!(ids, vec!["g1", "c1", "g2", "c2"]);
    }

    #[test]
    fn test_empty_config() {
        let config = FilterConfig::new();
        assert!(config.is_empty());

        let with_quick = FilterConfig {
            quick_filters: QuickFilters::from([(
                "region".to_string(),
                vec![FilterValue::from("north")],
            )]),
            ..FilterConfig::new()
        };
        assert!(!with_quick.is_empty());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = FilterConfig {
            groups: vec![FilterGroup::new("g1").with_condition(
                FilterCondition::new("c1", "status", FilterOperator::In)
                    .with_value(vec!["草稿".to_string(), "已审核".to_string()])
                    .with_value_type(FilterType::Select),
            )],
            quick_filters: QuickFilters::from([(
                "region".to_string(),
                vec![FilterValue::from("north")],
            )]),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: FilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        // Host-facing field names are stable
        assert!(json.contains("\"quickFilters\""));
        assert!(json.contains("\"valueType\":\"select\""));
        assert!(json.contains("\"operator\":\"in\""));
        assert!(json.contains("\"logic\":\"AND\""));
    }

    #[test]
    fn test_condition_without_value_omits_field() {
        let cond = FilterCondition::new("c1", "remark", FilterOperator::IsEmpty);
        let json = serde_json::to_string(&cond).unwrap();
        assert!(!json.contains("\"value\""));
    }
}
