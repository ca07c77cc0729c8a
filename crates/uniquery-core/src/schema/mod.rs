//! Host schema introspection: which columns can be filtered, and as what type.

mod column;

pub use column::{Choice, ColumnDef};

/// An ordered view over the host table's columns.
///
/// Order is preserved from the host schema; it governs the default column of a
/// new condition and the ordering of column pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSet {
    columns: Vec<ColumnDef>,
}

impl ColumnSet {
    /// Create a column set from host-declared columns.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// All columns, in host order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Look up a column by field identifier.
    pub fn get(&self, field: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// The ordered subset of columns eligible for filtering: excludes columns
    /// explicitly marked non-filterable and columns without a field identifier
    /// (computed/action columns).
    pub fn filterable_columns(&self) -> Vec<&ColumnDef> {
        self.columns
            .iter()
            .filter(|c| c.filterable && !c.field.is_empty())
            .collect()
    }

    /// The first filterable column, used as the default field of a freshly
    /// created condition.
    pub fn first_filterable(&self) -> Option<&ColumnDef> {
        self.filterable_columns().into_iter().next()
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema declares no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Vec<ColumnDef>> for ColumnSet {
    fn from(columns: Vec<ColumnDef>) -> Self {
        Self::new(columns)
    }
}
