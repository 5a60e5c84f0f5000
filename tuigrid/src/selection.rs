use std::collections::BTreeSet;

/// Selected row positions, tracked as 0-based indices into the *current
/// sorted view*, not stable row identities.
///
/// Known limitation: because positions are view-relative, re-sorting or
/// replacing the data while rows are selected leaves the indices pointing at
/// different rows. Callers that need selection to survive reordering must
/// clear it on sort changes or key rows by their own stable identity.
///
/// The set is private; all mutation goes through [`toggle_row`],
/// [`select_all`], and [`clear`].
///
/// [`toggle_row`]: SelectionState::toggle_row
/// [`select_all`]: SelectionState::select_all
/// [`clear`]: SelectionState::clear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    rows: BTreeSet<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one position from the selection.
    pub fn toggle_row(&mut self, position: usize, selected: bool) {
        if selected {
            self.rows.insert(position);
        } else {
            self.rows.remove(&position);
        }
    }

    /// Select every position in a view of `view_len` rows.
    pub fn select_all(&mut self, view_len: usize) {
        self.rows = (0..view_len).collect();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn contains(&self, position: usize) -> bool {
        self.rows.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selection covers the whole view. False for an empty selection, so an
    /// empty table never reports "all selected".
    pub fn is_all_selected(&self, view_len: usize) -> bool {
        !self.rows.is_empty() && self.rows.len() == view_len
    }

    /// Some but not all rows selected; drives the tri-state header checkbox.
    pub fn is_partially_selected(&self, view_len: usize) -> bool {
        !self.rows.is_empty() && self.rows.len() < view_len
    }

    /// Materialize the selected row values from the current view, in
    /// ascending position order. Positions past the end of the view are
    /// skipped rather than panicking.
    pub fn selected_rows<'a, T>(&self, view: &'a [T]) -> Vec<&'a T> {
        self.rows.iter().filter_map(|&i| view.get(i)).collect()
    }

    /// Positions currently selected, in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }
}
