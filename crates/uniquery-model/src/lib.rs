//! Data model for the uniquery advanced filter builder.
//!
//! This crate defines the condition tree that the filter editor produces and
//! the host query layer consumes: typed filter conditions, nested AND/OR
//! groups, and the quick-filter map.
//!
//! # Modules
//!
//! - [`operator`] - Closed filter-type and operator enums
//! - [`value`] - Operator-dependent condition values
//! - [`condition`] - Conditions, groups, and the combined filter configuration
//!
//! # Serialization
//!
//! All types derive `serde::Serialize` and `serde::Deserialize` using the
//! field names the host persists in saved-search payloads (`valueType`,
//! `quickFilters`, snake_case operators, `AND`/`OR` logic).

pub mod condition;
pub mod operator;
pub mod value;

// Re-export commonly used types at crate root
pub use condition::{FilterCondition, FilterConfig, FilterGroup, QuickFilters};
pub use operator::{FilterOperator, FilterType, GroupLogic};
pub use value::FilterValue;
