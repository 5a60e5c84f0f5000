use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Horizontal alignment hint for a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Value extracted from a row for display and comparison.
///
/// A missing or malformed field resolves to `Empty`, which renders as empty
/// content and sorts before everything else. No field access ever fails.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Rank used to order values of different kinds against each other.
    /// Within a kind, the kind's own ordering applies.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Three-way comparison between two cell values.
    ///
    /// Text compares case-insensitively (both sides lowercased first) — a
    /// deliberate UX choice, not a by-product. Values of different kinds
    /// compare by rank so mixed columns still order deterministically.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Named-field access into a row. The table never assumes anything else
/// about the row type; a key it doesn't recognize must return `Empty`.
pub trait RowData {
    fn field(&self, key: &str) -> CellValue;
}

/// Computed-value override for a column, replacing direct field lookup.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Describes one displayed field of a row: which field to read, how to label
/// it, and whether its header participates in sorting.
pub struct Column<T> {
    /// Identifies which field this column reads. Must be unique within a
    /// table instance; doubles as the sort-state identifier.
    pub key: String,
    /// Display label for the header cell.
    pub header: String,
    pub accessor: Option<Accessor<T>>,
    pub sortable: bool,
    pub align: TextAlign,
    pub width: Option<u16>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            accessor: None,
            sortable: false,
            align: TextAlign::Left,
            width: None,
        }
    }

    /// Derive this column's value with a function instead of field lookup.
    /// Used for computed or formatted content.
    pub fn accessor(mut self, f: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        self.accessor = Some(Arc::new(f));
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

impl<T: RowData> Column<T> {
    /// Resolve the display value for a row: `accessor(row)` if present,
    /// else direct field lookup by `key`.
    pub fn value_for(&self, row: &T) -> CellValue {
        match &self.accessor {
            Some(f) => f(row),
            None => row.field(&self.key),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("accessor", &self.accessor.as_ref().map(|_| "fn"))
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .finish()
    }
}
