use std::fmt;

use log::debug;

use crate::column::{Column, RowData};
use crate::selection::SelectionState;
use crate::sort::{sorted_view, SortState};

/// Which of the three mutually exclusive presentation states to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Data fetch in flight. Wins over `Empty` regardless of row count.
    Loading,
    /// No rows and not loading.
    Empty,
    Normal,
}

/// Callback receiving the materialized selected rows whenever selection
/// changes.
pub type RowSelectHandler<T> = Box<dyn FnMut(Vec<T>)>;

/// Client-side data table: column model, sort engine, and row selection
/// composed over caller-supplied data.
///
/// The table owns its sort and selection state; data and columns are
/// supplied by the caller. All operations run synchronously within one
/// event-handling turn, so the displayed order and the selection callback
/// payload are always consistent with the same inputs.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    selectable: bool,
    loading: bool,
    empty_message: String,
    loading_message: String,
    sort: SortState,
    selection: SelectionState,
    on_row_select: Option<RowSelectHandler<T>>,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            selectable: false,
            loading: false,
            empty_message: "No data available".to_string(),
            loading_message: "Loading...".to_string(),
            sort: SortState::new(),
            selection: SelectionState::new(),
            on_row_select: None,
        }
    }

    /// Enable per-row checkboxes and the select-all header checkbox.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Register the selection-change callback. Invoked with the selected
    /// row values (not positions) after every selection mutation.
    pub fn on_row_select(mut self, handler: impl FnMut(Vec<T>) + 'static) -> Self {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_message
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_message
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn render_state(&self, data: &[T]) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if data.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Normal
        }
    }

    pub fn is_all_selected(&self, data: &[T]) -> bool {
        self.selection.is_all_selected(data.len())
    }

    pub fn is_partially_selected(&self, data: &[T]) -> bool {
        self.selection.is_partially_selected(data.len())
    }
}

impl<T: RowData + Clone> DataTable<T> {
    /// Rows in display order: `data` reordered by the active sort, or a
    /// copy in original order when no sort is active.
    pub fn view(&self, data: &[T]) -> Vec<T> {
        sorted_view(data, &self.columns, &self.sort)
    }

    /// Handle a click on a column header. Advances the sort cycle for
    /// sortable columns; a click on a non-sortable or unknown column is a
    /// no-op, not an error.
    pub fn click_header(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key == key && c.sortable);
        if !sortable {
            return;
        }
        self.sort.toggle(key);
        debug!("table sort: {:?}", self.sort.active());
    }

    /// Toggle selection of the row at `position` in the current view, then
    /// notify the selection callback. No-op when the table is not
    /// selectable.
    pub fn toggle_row(&mut self, position: usize, selected: bool, data: &[T]) {
        if !self.selectable {
            return;
        }
        self.selection.toggle_row(position, selected);
        debug!("table selection: {} rows", self.selection.len());
        self.emit_selection(data);
    }

    /// Select or clear every row in the current view, then notify the
    /// selection callback. No-op when the table is not selectable.
    pub fn toggle_all(&mut self, selected: bool, data: &[T]) {
        if !self.selectable {
            return;
        }
        if selected {
            self.selection.select_all(data.len());
        } else {
            self.selection.clear();
        }
        debug!("table selection: {} rows", self.selection.len());
        self.emit_selection(data);
    }

    /// Materialized selected rows, looked up by position in the current
    /// sorted view.
    pub fn selected_rows(&self, data: &[T]) -> Vec<T> {
        let view = self.view(data);
        self.selection
            .selected_rows(&view)
            .into_iter()
            .cloned()
            .collect()
    }

    fn emit_selection(&mut self, data: &[T]) {
        let view = sorted_view(data, &self.columns, &self.sort);
        let rows: Vec<T> = self
            .selection
            .selected_rows(&view)
            .into_iter()
            .cloned()
            .collect();
        if let Some(handler) = self.on_row_select.as_mut() {
            handler(rows);
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns.len())
            .field("selectable", &self.selectable)
            .field("loading", &self.loading)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .finish()
    }
}
