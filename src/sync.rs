use log::debug;

use crate::error::Result;
use crate::remote::Worksheet;
use crate::table::{CellValue, Table};

/// Data rows currently in the worksheet: populated rows minus the header.
pub fn data_row_count(ws: &impl Worksheet) -> Result<usize> {
    Ok(ws.rows()?.len().saturating_sub(1))
}

/// Replace the worksheet wholesale: clear, then write the table with its
/// header at row 1. A write failure after the clear leaves the worksheet
/// empty; the caller reports it and the next successful push repairs it.
pub fn overwrite(ws: &mut impl Worksheet, table: &Table) -> Result<usize> {
    ws.clear()?;
    ws.write(table, 1, true)?;
    Ok(table.row_count())
}

/// Add the table's rows beneath whatever the worksheet already holds.
///
/// An empty worksheet receives the full table, header included, and the
/// upload's column order becomes the established schema. Otherwise the rows
/// are conformed to the existing header and written starting two rows past
/// the last data row's index, never touching row 1.
pub fn append(ws: &mut impl Worksheet, table: &Table) -> Result<usize> {
    let header = ws.header()?;
    if header.is_empty() {
        debug!("destination is empty; the upload defines the schema");
        ws.write(table, 1, true)?;
        return Ok(table.row_count());
    }

    let conformed = conform_to_header(table, &header);
    let existing = data_row_count(ws)?;
    debug!("appending {} rows after {existing} existing", conformed.row_count());
    ws.write(&conformed, existing + 2, false)?;
    Ok(conformed.row_count())
}

/// Project the upload onto the destination's established column order:
/// destination columns first (missing ones written as blanks), then any
/// columns the upload has that the destination never saw. Name matching
/// here is exact; the destination's own header spelling is authoritative.
pub(crate) fn conform_to_header(table: &Table, header: &[String]) -> Table {
    let rows = table.row_count();
    let mut out = Table::new();
    for name in header {
        match table.column(name) {
            Some(column) => out.push_column(name.clone(), column.cells.clone()),
            None => out.push_column(name.clone(), vec![CellValue::Empty; rows]),
        }
    }
    for column in table.columns() {
        if !header.iter().any(|h| h == &column.name) {
            out.push_column(column.name.clone(), column.cells.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::memory::MemorySheet;

    fn upload(names: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(
            names.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|s| CellValue::from_field(s)).collect())
                .collect(),
        )
    }

    #[test]
    fn overwrite_replaces_everything() {
        let mut ws = MemorySheet::with_rows(&[
            &["Old", "Header", "Wide"],
            &["1", "2", "3"],
            &["4", "5", "6"],
        ]);
        let table = upload(&["SKU", "Qty"], &[&["A1", "5"]]);
        let written = overwrite(&mut ws, &table).unwrap();
        assert_eq!(written, 1);
        assert_eq!(
            ws.grid(),
            &[
                vec!["SKU".to_string(), "Qty".to_string()],
                vec!["A1".to_string(), "5".to_string()],
            ]
        );
    }

    #[test]
    fn append_to_empty_sheet_writes_header_at_row_one() {
        let mut ws = MemorySheet::new();
        let table = upload(&["A", "B"], &[&["1", "2"], &["3", "4"]]);
        append(&mut ws, &table).unwrap();
        assert_eq!(ws.grid()[0], vec!["A".to_string(), "B".to_string()]);
        assert_eq!(ws.grid().len(), 3);
    }

    #[test]
    fn append_lands_below_existing_rows_without_header() {
        let mut ws = MemorySheet::with_rows(&[&["A", "B"], &["1", "2"]]);
        let table = upload(&["A", "B"], &[&["3", "4"]]);
        append(&mut ws, &table).unwrap();
        assert_eq!(
            ws.grid(),
            &[
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ]
        );
        assert_eq!(data_row_count(&ws).unwrap(), 2);
    }

    #[test]
    fn append_reorders_to_the_established_schema() {
        let mut ws = MemorySheet::with_rows(&[&["A", "B", "C"], &["1", "2", "3"]]);
        // Upload arrives with B and A swapped, C missing, D novel.
        let table = upload(&["B", "A", "D"], &[&["b", "a", "d"]]);
        append(&mut ws, &table).unwrap();
        assert_eq!(
            ws.grid()[2],
            vec![
                "a".to_string(),
                "b".to_string(),
                String::new(),
                "d".to_string()
            ]
        );
        // Row 1 keeps the old header even though D exists now.
        assert_eq!(
            ws.grid()[0],
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn append_matches_names_exactly() {
        let mut ws = MemorySheet::with_rows(&[&["ASIN"], &["B00A"]]);
        let table = upload(&["asin"], &[&["B00B"]]);
        append(&mut ws, &table).unwrap();
        // Case differs, so the destination column stays blank and the
        // upload's spelling trails as a novel column.
        assert_eq!(ws.grid()[2], vec![String::new(), "B00B".to_string()]);
    }

    #[test]
    fn append_writes_nulls_as_empty_strings() {
        let mut ws = MemorySheet::with_rows(&[&["A", "B"], &["1", "2"]]);
        let table = upload(&["A", "B"], &[&["3", ""]]);
        append(&mut ws, &table).unwrap();
        assert_eq!(ws.grid()[2], vec!["3".to_string(), String::new()]);
    }

    #[test]
    fn append_twice_stacks() {
        let mut ws = MemorySheet::new();
        let first = upload(&["A"], &[&["1"], &["2"]]);
        let second = upload(&["A"], &[&["3"]]);
        append(&mut ws, &first).unwrap();
        append(&mut ws, &second).unwrap();
        assert_eq!(data_row_count(&ws).unwrap(), 3);
        assert_eq!(ws.grid()[3], vec!["3".to_string()]);
    }

    #[test]
    fn conform_preserves_blank_header_cells_as_columns() {
        // A blank name in the middle of the destination header still owns
        // its physical column; values for it stay blank.
        let header = vec!["A".to_string(), String::new(), "C".to_string()];
        let table = upload(&["C", "A"], &[&["c", "a"]]);
        let out = conform_to_header(&table, &header);
        assert_eq!(out.header_row(), vec!["A", "", "C"]);
        assert_eq!(
            out.data_rows(),
            vec![vec!["a".to_string(), String::new(), "c".to_string()]]
        );
    }

    #[test]
    fn conform_keeps_novel_columns_in_upload_order() {
        let header = vec!["A".to_string()];
        let table = upload(&["Z", "A", "Y"], &[&["z", "a", "y"]]);
        let out = conform_to_header(&table, &header);
        assert_eq!(out.header_row(), vec!["A", "Z", "Y"]);
    }
}
