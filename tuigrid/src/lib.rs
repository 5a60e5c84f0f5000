pub mod column;
pub mod event;
pub mod input;
pub mod selection;
pub mod sort;
pub mod table;
pub mod text;
pub mod view;

pub use column::{Accessor, CellValue, Column, RowData, TextAlign};
pub use event::{from_crossterm, Key, Modifiers};
pub use input::{InputEvent, InputField};
pub use selection::SelectionState;
pub use sort::{sorted_view, SortDirection, SortSpec, SortState};
pub use table::{DataTable, RenderState, RowSelectHandler};
pub use view::{CheckboxState, HeaderCell, RowView, TableView};
