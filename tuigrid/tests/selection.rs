use tuigrid::{sorted_view, CellValue, Column, RowData, SelectionState, SortState};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    label: &'static str,
    rank: u32,
}

impl RowData for Item {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "label" => self.label.into(),
            "rank" => self.rank.into(),
            _ => CellValue::Empty,
        }
    }
}

fn items() -> Vec<Item> {
    vec![
        Item { label: "delta", rank: 4 },
        Item { label: "alpha", rank: 1 },
        Item { label: "echo", rank: 5 },
        Item { label: "bravo", rank: 2 },
        Item { label: "charlie", rank: 3 },
    ]
}

// ============================================================================
// Toggle operations
// ============================================================================

#[test]
fn test_toggle_row_adds_and_removes() {
    let mut selection = SelectionState::new();
    assert!(selection.is_empty());

    selection.toggle_row(2, true);
    selection.toggle_row(0, true);
    assert_eq!(selection.len(), 2);
    assert!(selection.contains(0));
    assert!(selection.contains(2));
    assert!(!selection.contains(1));

    selection.toggle_row(2, false);
    assert_eq!(selection.len(), 1);
    assert!(!selection.contains(2));
}

#[test]
fn test_toggle_same_row_twice_is_idempotent() {
    let mut selection = SelectionState::new();
    selection.toggle_row(1, true);
    selection.toggle_row(1, true);
    assert_eq!(selection.len(), 1);

    selection.toggle_row(3, false);
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_select_all_and_clear() {
    let mut selection = SelectionState::new();
    selection.select_all(5);
    assert_eq!(selection.len(), 5);
    assert!(selection.is_all_selected(5));
    assert!(!selection.is_partially_selected(5));

    selection.clear();
    assert!(selection.is_empty());
    assert!(!selection.is_all_selected(5));
}

// ============================================================================
// Derived reads
// ============================================================================

#[test]
fn test_empty_selection_is_never_all_selected() {
    let selection = SelectionState::new();
    assert!(!selection.is_all_selected(0));
    assert!(!selection.is_partially_selected(0));
}

#[test]
fn test_partial_selection() {
    let mut selection = SelectionState::new();
    selection.toggle_row(0, true);
    assert!(selection.is_partially_selected(5));
    assert!(!selection.is_all_selected(5));
}

#[test]
fn test_materialized_rows_in_position_order() {
    let view = items();
    let mut selection = SelectionState::new();
    selection.toggle_row(3, true);
    selection.toggle_row(1, true);

    let rows = selection.selected_rows(&view);
    let labels: Vec<_> = rows.iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["alpha", "bravo"]);
}

#[test]
fn test_out_of_range_positions_are_skipped() {
    let view = items();
    let mut selection = SelectionState::new();
    selection.toggle_row(1, true);
    selection.toggle_row(99, true);

    let rows = selection.selected_rows(&view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "alpha");
}

// ============================================================================
// Positional tracking
// ============================================================================

// Known limitation: selection is keyed by position in the current view, not
// by row identity. Reordering the view while rows are selected makes the
// same positions point at different rows. This test documents the behavior;
// it is not an endorsement of it.
#[test]
fn test_selection_tracks_positions_not_identity() {
    let data = items();
    let columns = vec![Column::<Item>::new("rank", "Rank").sortable(true)];

    let unsorted = sorted_view(&data, &columns, &SortState::new());
    let mut selection = SelectionState::new();
    selection.toggle_row(0, true);
    assert_eq!(selection.selected_rows(&unsorted)[0].label, "delta");

    // Re-sort by rank; position 0 now holds a different row, and the
    // selection silently follows the position.
    let mut sort = SortState::new();
    sort.toggle("rank");
    let sorted = sorted_view(&data, &columns, &sort);
    assert_eq!(selection.selected_rows(&sorted)[0].label, "alpha");
}
