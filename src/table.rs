use std::fmt;

/// A single cell of an uploaded table. Uploads carry text and numbers only;
/// anything else is flattened to text at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Str(String),
    Number(f64),
}

impl CellValue {
    /// Build a cell from a raw text field. Empty fields become `Empty` so
    /// they render as blank cells instead of empty quoted strings.
    pub fn from_field(field: &str) -> CellValue {
        if field.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Str(field.to_string())
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Str(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// Whole numbers print without a trailing `.0` so spreadsheet cells read
/// `2000`, not `2000.0`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

/// Column-ordered table produced by the parsers. Every column holds the same
/// number of cells; the parsers pad ragged input before construction.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    /// Build from a header and row-major cells. Rows must already be padded
    /// to the header width.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Table {
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::with_capacity(rows.len()),
            })
            .collect();
        for row in rows {
            debug_assert_eq!(row.len(), columns.len());
            for (column, cell) in columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }
        Table { columns }
    }

    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<CellValue>) {
        debug_assert!(self.columns.is_empty() || cells.len() == self.row_count());
        self.columns.push(Column {
            name: name.into(),
            cells,
        });
    }

    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, cells: Vec<CellValue>) {
        debug_assert!(self.columns.is_empty() || cells.len() == self.row_count());
        self.columns.insert(
            index,
            Column {
                name: name.into(),
                cells,
            },
        );
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// First column with this exact name, if any.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn header_row(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Row-major rendering of the data cells, nulls as empty strings.
    pub fn data_rows(&self) -> Vec<Vec<String>> {
        (0..self.row_count())
            .map(|r| self.columns.iter().map(|c| c.cells[r].to_string()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            vec!["SKU".into(), "Qty".into()],
            vec![
                vec![CellValue::Str("A1".into()), CellValue::Number(5.0)],
                vec![CellValue::Str("B2".into()), CellValue::Empty],
            ],
        )
    }

    #[test]
    fn from_rows_transposes() {
        let t = sample();
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column("Qty").unwrap().cells[0], CellValue::Number(5.0));
    }

    #[test]
    fn data_rows_render_nulls_blank() {
        let t = sample();
        assert_eq!(
            t.data_rows(),
            vec![
                vec!["A1".to_string(), "5".to_string()],
                vec!["B2".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn whole_numbers_drop_decimal_point() {
        assert_eq!(format_number(2000.0), "2000");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn column_lookup_is_exact_and_first() {
        let mut t = sample();
        t.push_column("Qty", vec![CellValue::Number(9.0), CellValue::Number(9.0)]);
        assert_eq!(t.column("Qty").unwrap().cells[0], CellValue::Number(5.0));
        assert!(t.column("qty").is_none());
    }

    #[test]
    fn empty_field_becomes_empty_cell() {
        assert!(CellValue::from_field("").is_empty());
        assert_eq!(
            CellValue::from_field("x"),
            CellValue::Str("x".to_string())
        );
    }
}
