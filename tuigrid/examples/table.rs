//! Minimal non-interactive table walkthrough: build a table, click a header
//! twice, select some rows, and print each resulting view.

use tuigrid::{CellValue, CheckboxState, Column, DataTable, RowData, TableView, TextAlign};

#[derive(Debug, Clone)]
struct Book {
    title: &'static str,
    author: &'static str,
    year: u32,
}

impl RowData for Book {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "title" => self.title.into(),
            "author" => self.author.into(),
            "year" => self.year.into(),
            _ => CellValue::Empty,
        }
    }
}

fn print_view(view: &TableView) {
    match view {
        TableView::Loading { message } | TableView::Empty { message } => {
            println!("  {message}");
        }
        TableView::Rows { header, rows, select_all, .. } => {
            let checkbox = match select_all {
                Some(CheckboxState::Checked) => "[x]",
                Some(CheckboxState::Partial) => "[-]",
                Some(CheckboxState::Unchecked) => "[ ]",
                None => "   ",
            };
            let cells: Vec<&str> = header.iter().map(|h| h.text.as_str()).collect();
            println!("  {checkbox} {}", cells.join("  "));
            for row in rows {
                let mark = if row.selected { "[x]" } else { "[ ]" };
                println!("  {mark} {}", row.cells.join("  "));
            }
        }
    }
    println!();
}

fn main() {
    let books = vec![
        Book { title: "Snow Crash", author: "Stephenson", year: 1992 },
        Book { title: "accelerando", author: "Stross", year: 2005 },
        Book { title: "Neuromancer", author: "Gibson", year: 1984 },
    ];

    let mut table = DataTable::new(vec![
        Column::new("title", "Title").sortable(true),
        Column::new("author", "Author"),
        Column::new("year", "Year").sortable(true).align(TextAlign::Right),
    ])
    .selectable(true)
    .on_row_select(|rows: Vec<Book>| println!("  -> selected: {} rows", rows.len()));

    println!("original order:");
    print_view(&TableView::build(&table, &books));

    table.click_header("title");
    println!("sorted by title, ascending (case-insensitive):");
    print_view(&TableView::build(&table, &books));

    table.click_header("title");
    println!("sorted by title, descending:");
    print_view(&TableView::build(&table, &books));

    table.toggle_row(0, true, &books);
    print_view(&TableView::build(&table, &books));
}
