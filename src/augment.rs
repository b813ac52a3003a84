use crate::period::PeriodMarker;
use crate::table::{CellValue, Table};

/// Where the stamped period columns go relative to the upload's own columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPlacement {
    /// `Quarter`, `Month`, then the upload's columns.
    Leading,
    /// The upload's columns, then `Quarter`, `Month`.
    Trailing,
}

/// Stamp `Quarter` and `Month` columns onto every row of the table. Both
/// columns broadcast the single marker value; rows are never inspected.
pub fn add_period_columns(table: &mut Table, marker: &PeriodMarker, placement: MarkerPlacement) {
    let rows = table.row_count();
    let quarter = vec![CellValue::Number(f64::from(marker.quarter)); rows];
    let month = vec![CellValue::Number(f64::from(marker.month)); rows];
    match placement {
        MarkerPlacement::Leading => {
            table.insert_column(0, "Quarter", quarter);
            table.insert_column(1, "Month", month);
        }
        MarkerPlacement::Trailing => {
            table.push_column("Quarter", quarter);
            table.push_column("Month", month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> PeriodMarker {
        PeriodMarker::from_month(2025, 7).unwrap()
    }

    fn two_row_table() -> Table {
        Table::from_rows(
            vec!["Product".into()],
            vec![
                vec![CellValue::Str("B00A".into())],
                vec![CellValue::Str("B00B".into())],
            ],
        )
    }

    #[test]
    fn leading_puts_quarter_then_month_first() {
        let mut table = two_row_table();
        add_period_columns(&mut table, &marker(), MarkerPlacement::Leading);
        assert_eq!(table.header_row(), vec!["Quarter", "Month", "Product"]);
        assert_eq!(
            table.data_rows(),
            vec![
                vec!["3".to_string(), "7".to_string(), "B00A".to_string()],
                vec!["3".to_string(), "7".to_string(), "B00B".to_string()],
            ]
        );
    }

    #[test]
    fn trailing_appends_after_the_upload_columns() {
        let mut table = two_row_table();
        add_period_columns(&mut table, &marker(), MarkerPlacement::Trailing);
        assert_eq!(table.header_row(), vec!["Product", "Quarter", "Month"]);
    }

    #[test]
    fn empty_table_gains_empty_columns() {
        let mut table = Table::from_rows(vec!["Product".into()], vec![]);
        add_period_columns(&mut table, &marker(), MarkerPlacement::Leading);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }
}
