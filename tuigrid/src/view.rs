use crate::column::{RowData, TextAlign};
use crate::table::{DataTable, RenderState};
use crate::text::{display_width, pad_to_width};

/// Tri-state for the select-all header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    /// Some but not all rows selected.
    Partial,
}

/// One header cell, ready to draw: label plus sort indicator, already padded
/// to the column width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub text: String,
    pub align: TextAlign,
    pub sortable: bool,
}

/// One body row, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<String>,
    pub selected: bool,
}

/// Renderer-agnostic snapshot of a table. The rendering collaborator draws
/// whichever variant it gets; the three are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading { message: String },
    Empty { message: String },
    Rows {
        header: Vec<HeaderCell>,
        rows: Vec<RowView>,
        /// Present only when the table is selectable.
        select_all: Option<CheckboxState>,
        /// Final cell width per column, including hint or content fit.
        widths: Vec<usize>,
    },
}

impl TableView {
    /// Snapshot `table` over `data`: resolves the render state, sorts the
    /// rows, formats every cell to its column width, and derives the
    /// checkbox states.
    pub fn build<T: RowData + Clone>(table: &DataTable<T>, data: &[T]) -> TableView {
        match table.render_state(data) {
            RenderState::Loading => TableView::Loading {
                message: table.loading_text().to_string(),
            },
            RenderState::Empty => TableView::Empty {
                message: table.empty_text().to_string(),
            },
            RenderState::Normal => Self::build_rows(table, data),
        }
    }

    fn build_rows<T: RowData + Clone>(table: &DataTable<T>, data: &[T]) -> TableView {
        let view = table.view(data);
        let columns = table.columns();

        // Raw cell text first; widths depend on it for hint-less columns.
        let raw: Vec<Vec<String>> = view
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| c.value_for(row).to_string())
                    .collect()
            })
            .collect();

        let header_text: Vec<String> = columns
            .iter()
            .map(|c| match table.sort().indicator(&c.key) {
                Some(arrow) => format!("{} {arrow}", c.header),
                None => c.header.clone(),
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| match c.width {
                Some(w) => w as usize,
                None => {
                    let content = raw
                        .iter()
                        .map(|cells| display_width(&cells[i]))
                        .max()
                        .unwrap_or(0);
                    content.max(display_width(&header_text[i]))
                }
            })
            .collect();

        let header = columns
            .iter()
            .zip(&header_text)
            .zip(&widths)
            .map(|((c, text), &w)| HeaderCell {
                key: c.key.clone(),
                text: pad_to_width(text, w, c.align),
                align: c.align,
                sortable: c.sortable,
            })
            .collect();

        let rows = raw
            .iter()
            .enumerate()
            .map(|(i, cells)| RowView {
                cells: cells
                    .iter()
                    .zip(columns)
                    .zip(&widths)
                    .map(|((cell, c), &w)| pad_to_width(cell, w, c.align))
                    .collect(),
                selected: table.selection().contains(i),
            })
            .collect();

        let select_all = table.is_selectable().then(|| {
            if table.is_all_selected(&view) {
                CheckboxState::Checked
            } else if table.is_partially_selected(&view) {
                CheckboxState::Partial
            } else {
                CheckboxState::Unchecked
            }
        });

        TableView::Rows {
            header,
            rows,
            select_all,
            widths,
        }
    }
}
