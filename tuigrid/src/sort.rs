use crate::column::{Column, RowData};

/// Sort order for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort: which column and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Current sort state of a table: either one active `SortSpec` or none.
///
/// Column key and direction are always present together or absent together;
/// wrapping the pair keeps that invariant structural.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState(Option<SortSpec>);

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&SortSpec> {
        self.0.as_ref()
    }

    pub fn is_sorted(&self) -> bool {
        self.0.is_some()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Apply a header click for `key`. Transition table, per column:
    /// none → ascending → descending → none; a click on a different column
    /// always restarts at ascending.
    pub fn toggle(&mut self, key: &str) {
        self.0 = match self.0.take() {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Ascending => Some(SortSpec {
                    key: spec.key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Header indicator for a column, or None if the column is not the
    /// active sort.
    pub fn indicator(&self, key: &str) -> Option<&'static str> {
        let spec = self.0.as_ref().filter(|spec| spec.key == key)?;
        Some(match spec.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        })
    }
}

/// Derive the display order from raw data and the current sort state.
///
/// With no active sort this is the identity: a copy of `data` in original
/// insertion order (a copy rather than a borrow, so callers never alias the
/// table's working set). With an active sort, rows are ordered by the value
/// the sort column extracts from each row. The sort is stable: rows whose
/// values compare equal keep their relative order from the input, so
/// repeated clicks reproduce identical orderings for identical ties.
///
/// Recomputed from scratch on every call; the component targets small,
/// unvirtualized datasets by design.
pub fn sorted_view<T>(data: &[T], columns: &[Column<T>], sort: &SortState) -> Vec<T>
where
    T: RowData + Clone,
{
    let Some(spec) = sort.active() else {
        return data.to_vec();
    };
    let Some(column) = columns.iter().find(|c| c.key == spec.key) else {
        // Sort references a column that no longer exists; fall back to
        // original order rather than failing.
        return data.to_vec();
    };

    // Extract each row's comparison value once, then sort index pairs.
    let mut keyed: Vec<(usize, _)> = data
        .iter()
        .map(|row| column.value_for(row))
        .enumerate()
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ord = a.compare(b);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(i, _)| data[i].clone()).collect()
}
