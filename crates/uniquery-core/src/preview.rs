//! Read-only projection of the active filters into displayable entries.
//!
//! The host renders these as removable chips above the table. Building the
//! list is pure; the entries carry a [`RemoveAction`] descriptor telling the
//! host which editor call undoes them.

use uniquery_model::{FilterGroup, FilterValue, QuickFilters};

use crate::operators::operator_label;
use crate::schema::{ColumnDef, ColumnSet};

/// What removing an active-filter entry means.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveAction {
    /// Drop one quick-filter value, or the whole field entry when `value`
    /// is absent.
    QuickFilter {
        field: String,
        value: Option<FilterValue>,
    },
    /// Drop one condition out of a top-level group.
    Condition {
        group_id: String,
        condition_id: String,
    },
    /// Not individually removable (conditions inside nested groups).
    None,
}

/// One entry in the active-filter summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilterEntry {
    /// Stable key for list rendering.
    pub key: String,
    /// Human-readable text, e.g. `状态: 草稿, 已审核`.
    pub text: String,
    /// Whether the host should offer a remove affordance.
    pub removable: bool,
    /// The removal this entry maps to.
    pub action: RemoveAction,
}

/// Render a value for display, resolving raw choice values to their labels
/// through the column's choice list.
pub fn display_value(value: &FilterValue, column: Option<&ColumnDef>) -> String {
    let label = |raw: &str| -> String {
        column
            .and_then(|c| c.choice_label(raw))
            .unwrap_or(raw)
            .to_string()
    };
    match value {
        FilterValue::String(s) => label(s),
        FilterValue::Bool(b) => label(if *b { "true" } else { "false" }),
        FilterValue::StringList(items) => items
            .iter()
            .map(|s| label(s))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.raw_text(),
    }
}

/// Flatten quick filters and advanced groups into displayable entries.
///
/// Quick-filter entries come first, one per field, in the map's stable field
/// order. Then one entry per top-level condition; conditions inside nested
/// groups are summarized but not individually removable.
pub fn active_filters(
    quick_filters: &QuickFilters,
    groups: &[FilterGroup],
    columns: &ColumnSet,
) -> Vec<ActiveFilterEntry> {
    let mut entries = Vec::new();

    for (field, values) in quick_filters {
        if values.is_empty() {
            continue;
        }
        let column = columns.get(field);
        let title = column.map_or(field.as_str(), |c| c.title.as_str());
        let joined = values
            .iter()
            .map(|v| display_value(v, column))
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(ActiveFilterEntry {
            key: format!("quick:{field}"),
            text: format!("{title}: {joined}"),
            removable: true,
            action: RemoveAction::QuickFilter {
                field: field.clone(),
                value: None,
            },
        });
    }

    for group in groups {
        push_group_entries(group, group, columns, &mut entries);
    }

    entries
}

fn push_group_entries(
    top: &FilterGroup,
    group: &FilterGroup,
    columns: &ColumnSet,
    entries: &mut Vec<ActiveFilterEntry>,
) {
    let removable = std::ptr::eq(top, group);
    for condition in &group.conditions {
        let column = columns.get(&condition.field);
        let title = column.map_or(condition.field.as_str(), |c| c.title.as_str());
        let mut text = format!("{title} {}", operator_label(condition.operator));
        if condition.operator.requires_value() {
            if let Some(value) = &condition.value {
                text.push(' ');
                text.push_str(&display_value(value, column));
            }
        }
        entries.push(ActiveFilterEntry {
            key: format!("cond:{}", condition.id),
            text,
            removable,
            action: if removable {
                RemoveAction::Condition {
                    group_id: top.id.clone(),
                    condition_id: condition.id.clone(),
                }
            } else {
                RemoveAction::None
            },
        });
    }
    for nested in &group.groups {
        push_group_entries(top, nested, columns, entries);
    }
}

/// Pure counterpart of the editor's quick-filter removal: a new map with one
/// value (or one whole field) removed.
pub fn clear_quick_filter(
    quick_filters: &QuickFilters,
    field: &str,
    value: Option<&FilterValue>,
) -> QuickFilters {
    let mut next = quick_filters.clone();
    match value {
        Some(value) => {
            if let Some(values) = next.get_mut(field) {
                values.retain(|v| v != value);
                if values.is_empty() {
                    next.remove(field);
                }
            }
        }
        None => {
            next.remove(field);
        }
    }
    next
}

/// Whether any filter of either kind is active.
pub fn has_active_filters(quick_filters: &QuickFilters, groups: &[FilterGroup]) -> bool {
    groups.iter().any(|g| g.condition_count() > 0)
        || quick_filters.values().any(|v| !v.is_empty())
}

/// Number of active filters, for the badge next to the filter button: one
/// per quick-filter field plus one per condition anywhere in the tree.
pub fn active_filter_count(quick_filters: &QuickFilters, groups: &[FilterGroup]) -> usize {
    let quick = quick_filters.values().filter(|v| !v.is_empty()).count();
    let conditions: usize = groups.iter().map(FilterGroup::condition_count).sum();
    quick + conditions
}

#[cfg(test)]
mod tests {
    use uniquery_model::{FilterCondition, FilterOperator};

    use super::*;
    use crate::schema::ColumnDef;

    fn sample_columns() -> ColumnSet {
        ColumnSet::new(vec![
            ColumnDef::new("order_no", "单号"),
            ColumnDef::new("amount", "金额").with_kind("money"),
            ColumnDef::new("status", "状态")
                .with_kind("select")
                .with_choice("draft", "草稿")
                .with_choice("approved", "已审核"),
        ])
    }

    #[test]
    fn test_quick_filter_entry_resolves_choice_labels() {
        let mut quick = QuickFilters::new();
        quick.insert(
            "status".into(),
            vec!["draft".into(), "approved".into()],
        );

        let entries = active_filters(&quick, &[], &sample_columns());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "状态: 草稿, 已审核");
        assert_eq!(entries[0].key, "quick:status");
        assert!(entries[0].removable);
        assert_eq!(
            entries[0].action,
            RemoveAction::QuickFilter {
                field: "status".into(),
                value: None,
            }
        );
    }

    #[test]
    fn test_unknown_quick_filter_field_falls_back_to_raw() {
        let mut quick = QuickFilters::new();
        quick.insert("ghost".into(), vec!["x".into()]);

        let entries = active_filters(&quick, &[], &sample_columns());
        assert_eq!(entries[0].text, "ghost: x");
    }

    #[test]
    fn test_condition_entries_top_level_removable() {
        let group = FilterGroup::new("g1").with_condition(
            FilterCondition::new("c1", "amount", FilterOperator::GreaterThan).with_value(100.0),
        );

        let entries = active_filters(&QuickFilters::new(), &[group], &sample_columns());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "金额 大于 100");
        assert!(entries[0].removable);
        assert_eq!(
            entries[0].action,
            RemoveAction::Condition {
                group_id: "g1".into(),
                condition_id: "c1".into(),
            }
        );
    }

    #[test]
    fn test_value_less_operator_omits_value() {
        let group = FilterGroup::new("g1").with_condition(
            // A leftover value must not leak into the display
            FilterCondition::new("c1", "order_no", FilterOperator::IsEmpty).with_value("stale"),
        );

        let entries = active_filters(&QuickFilters::new(), &[group], &sample_columns());
        assert_eq!(entries[0].text, "单号 为空");
    }

    #[test]
    fn test_nested_conditions_not_removable() {
        let group = FilterGroup::new("g1")
            .with_condition(
                FilterCondition::new("c1", "order_no", FilterOperator::Contains).with_value("A"),
            )
            .with_group(FilterGroup::new("g2").with_condition(
                FilterCondition::new("c2", "amount", FilterOperator::Equals).with_value(5.0),
            ));

        let entries = active_filters(&QuickFilters::new(), &[group], &sample_columns());
        assert_eq!(entries.len(), 2);
        assert!(entries[0].removable);
        assert!(!entries[1].removable);
        assert_eq!(entries[1].action, RemoveAction::None);
    }

    #[test]
    fn test_display_value_shapes() {
        let columns = sample_columns();
        let status = columns.get("status");

        assert_eq!(display_value(&"draft".into(), status), "草稿");
        assert_eq!(display_value(&"draft".into(), None), "draft");
        assert_eq!(
            display_value(&FilterValue::NumberRange { low: Some(100.0), high: None }, None),
            "100 ~ "
        );
        assert_eq!(
            display_value(
                &FilterValue::DateRange {
                    start: "2024-01-01".into(),
                    end: "2024-01-31".into(),
                },
                None
            ),
            "2024-01-01 ~ 2024-01-31"
        );
    }

    #[test]
    fn test_clear_quick_filter_is_pure() {
        let mut quick = QuickFilters::new();
        quick.insert("status".into(), vec!["draft".into(), "approved".into()]);

        let one_removed = clear_quick_filter(&quick, "status", Some(&"draft".into()));
        assert_eq!(one_removed["status"], vec![FilterValue::from("approved")]);
        // Input untouched
        assert_eq!(quick["status"].len(), 2);

        let field_removed = clear_quick_filter(&quick, "status", None);
        assert!(field_removed.is_empty());

        // Removing from an absent field is a no-op
        let untouched = clear_quick_filter(&quick, "ghost", None);
        assert_eq!(untouched, quick);
    }

    #[test]
    fn test_active_count_and_has_active() {
        let quick = QuickFilters::new();
        assert!(!has_active_filters(&quick, &[]));
        assert_eq!(active_filter_count(&quick, &[]), 0);

        let mut quick = QuickFilters::new();
        quick.insert("status".into(), vec!["draft".into()]);
        let group = FilterGroup::new("g1")
            .with_condition(
                FilterCondition::new("c1", "order_no", FilterOperator::Contains).with_value("A"),
            )
            .with_group(FilterGroup::new("g2").with_condition(
                FilterCondition::new("c2", "amount", FilterOperator::Equals).with_value(5.0),
            ));

        assert!(has_active_filters(&quick, std::slice::from_ref(&group)));
        // one quick field + two conditions (nested counted)
        assert_eq!(active_filter_count(&quick, &[group]), 3);
    }
}
