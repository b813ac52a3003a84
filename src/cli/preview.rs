use std::path::Path;

use comfy_table::Table;

use crate::destination;
use crate::error::{Result, SyncError};
use crate::ingest;

pub fn run(file: &str, dest_key: &str, rows: usize) -> Result<()> {
    let dest = destination::find(dest_key)
        .ok_or_else(|| SyncError::UnknownDestination(dest_key.to_string()))?;
    let upload = ingest::prepare_upload(dest, Path::new(file))?;

    if let Some(marker) = &upload.marker {
        println!(
            "Period from filename: month {}/{} (Q{})",
            marker.month, marker.year, marker.quarter
        );
    }

    let mut table = Table::new();
    table.set_header(upload.table.header_row());
    for row in upload.table.data_rows().into_iter().take(rows) {
        table.add_row(row);
    }
    println!("{table}");

    let total = upload.table.row_count();
    if total > rows {
        println!(
            "{} rows, {} columns (showing first {rows}) -> '{}' ({})",
            total,
            upload.table.column_count(),
            dest.worksheet,
            dest.mode.label()
        );
    } else {
        println!(
            "{} rows, {} columns -> '{}' ({})",
            total,
            upload.table.column_count(),
            dest.worksheet,
            dest.mode.label()
        );
    }
    Ok(())
}
