use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{
    from_crossterm, CellValue, CheckboxState, Column, DataTable, HeaderCell, InputField, Key,
    Modifiers, RowData, RowView, TableView, TextAlign,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: &'static str,
    email: &'static str,
    age: u32,
    active: bool,
}

impl RowData for User {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "email" => self.email.into(),
            "age" => self.age.into(),
            "active" => self.active.into(),
            _ => CellValue::Empty,
        }
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User { name: "Charlie", email: "charlie@example.com", age: 35, active: true },
        User { name: "alice", email: "alice@example.com", age: 28, active: true },
        User { name: "Eve", email: "eve@example.com", age: 41, active: false },
        User { name: "Bob", email: "bob@example.com", age: 22, active: true },
        User { name: "Dave", email: "dave@example.com", age: 30, active: false },
        User { name: "mallory", email: "mallory@example.com", age: 26, active: true },
    ]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email").sortable(true),
        Column::new("age", "Age").sortable(true).align(TextAlign::Right),
        Column::new("active", "Status")
            .accessor(|u: &User| if u.active { "active".into() } else { "inactive".into() }),
    ]
}

/// Raw-mode + alternate-screen guard. Restores the terminal on drop so a
/// panic doesn't leave the shell unusable.
struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Filter,
    Table,
}

struct App {
    data: Vec<User>,
    table: DataTable<User>,
    filter: InputField,
    focus: Focus,
    /// Column index the header cursor sits on.
    column_cursor: usize,
    /// Row index the row cursor sits on, within the current view.
    row_cursor: usize,
    status: String,
}

impl App {
    fn new() -> Self {
        let table = DataTable::new(user_columns())
            .selectable(true)
            .empty_message("No users match the filter")
            .on_row_select(|rows: Vec<User>| info!("selection changed: {} rows", rows.len()));
        Self {
            data: sample_users(),
            table,
            filter: InputField::new()
                .label("Filter")
                .placeholder("Type to filter by name")
                .helper("Tab switches focus, Esc quits"),
            focus: Focus::Filter,
            column_cursor: 0,
            row_cursor: 0,
            status: String::new(),
        }
    }

    /// Rows after applying the filter field; this is what the table sees.
    fn filtered(&self) -> Vec<User> {
        let needle = self.filter.text().to_lowercase();
        if needle.is_empty() {
            return self.data.clone();
        }
        self.data
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if key == Key::Escape {
            return false;
        }
        if key == Key::Tab {
            self.focus = match self.focus {
                Focus::Filter => Focus::Table,
                Focus::Table => Focus::Filter,
            };
            return true;
        }

        match self.focus {
            Focus::Filter => {
                self.filter.handle_key(key, modifiers);
            }
            Focus::Table => self.handle_table_key(key),
        }
        true
    }

    fn handle_table_key(&mut self, key: Key) {
        let rows = self.filtered();
        let column_count = self.table.columns().len();
        match key {
            Key::Left => {
                self.column_cursor = self.column_cursor.saturating_sub(1);
            }
            Key::Right => {
                self.column_cursor = (self.column_cursor + 1).min(column_count - 1);
            }
            Key::Up => {
                self.row_cursor = self.row_cursor.saturating_sub(1);
            }
            Key::Down => {
                self.row_cursor = (self.row_cursor + 1).min(rows.len().saturating_sub(1));
            }
            Key::Enter => {
                let key = self.table.columns()[self.column_cursor].key.clone();
                self.table.click_header(&key);
                self.status = match self.table.sort().active() {
                    Some(spec) => format!("sorted by {} ({:?})", spec.key, spec.direction),
                    None => "sort cleared".to_string(),
                };
            }
            Key::Char(' ') => {
                let selected = self.table.selection().contains(self.row_cursor);
                self.table.toggle_row(self.row_cursor, !selected, &rows);
            }
            Key::Char('a') => {
                let all = self.table.is_all_selected(&rows);
                self.table.toggle_all(!all, &rows);
            }
            Key::Char('l') => {
                let loading = !self.table.is_loading();
                self.table.set_loading(loading);
            }
            _ => {}
        }
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

        // Filter field.
        let marker = if self.focus == Focus::Filter { ">" } else { " " };
        let label = self.filter.label_text().unwrap_or("");
        queue!(
            out,
            Print(format!("{marker} {label}: [{}]", self.filter.display_text())),
            cursor::MoveToNextLine(1),
        )?;
        if let Some(message) = self.filter.message() {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(format!("  {message}")),
                SetAttribute(Attribute::Reset),
                cursor::MoveToNextLine(2),
            )?;
        }

        let rows = self.filtered();
        match TableView::build(&self.table, &rows) {
            TableView::Loading { message } | TableView::Empty { message } => {
                queue!(out, Print(format!("  {message}")), cursor::MoveToNextLine(1))?;
            }
            TableView::Rows { header, rows, select_all, .. } => {
                self.draw_rows(out, &header, &rows, select_all)?;
            }
        }

        queue!(
            out,
            cursor::MoveToNextLine(1),
            SetAttribute(Attribute::Dim),
            Print(format!(
                "  enter: sort  space: select  a: select all  l: loading  {}",
                self.status
            )),
            SetAttribute(Attribute::Reset),
        )?;
        out.flush()
    }

    fn draw_rows(
        &self,
        out: &mut impl Write,
        header: &[HeaderCell],
        rows: &[RowView],
        select_all: Option<CheckboxState>,
    ) -> io::Result<()> {
        let checkbox = match select_all {
            Some(CheckboxState::Checked) => "[x]",
            Some(CheckboxState::Partial) => "[-]",
            Some(CheckboxState::Unchecked) => "[ ]",
            None => "   ",
        };
        queue!(out, SetAttribute(Attribute::Bold), Print(format!("  {checkbox} ")))?;
        for (i, cell) in header.iter().enumerate() {
            if self.focus == Focus::Table && i == self.column_cursor {
                queue!(
                    out,
                    SetAttribute(Attribute::Underlined),
                    Print(&cell.text),
                    SetAttribute(Attribute::NoUnderline),
                )?;
            } else {
                queue!(out, Print(&cell.text))?;
            }
            queue!(out, Print("  "))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), cursor::MoveToNextLine(1))?;

        for (i, row) in rows.iter().enumerate() {
            let mark = if row.selected { "[x]" } else { "[ ]" };
            let here = self.focus == Focus::Table && i == self.row_cursor;
            if here {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(out, Print(format!("  {mark} {}", row.cells.join("  "))))?;
            if here {
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
            queue!(out, cursor::MoveToNextLine(1))?;
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("tuigrid-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut screen = Screen::new()?;
    let mut app = App::new();

    loop {
        app.draw(&mut screen.stdout)?;

        if let CrosstermEvent::Key(key_event) = event::read()? {
            if key_event.kind != event::KeyEventKind::Press {
                continue;
            }
            let Some((key, modifiers)) = from_crossterm(&key_event) else {
                continue;
            };
            if !app.handle_key(key, modifiers) {
                break;
            }
        }
    }

    Ok(())
}
