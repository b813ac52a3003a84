use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::destination::{self, SyncMode};
use crate::error::{Result, SyncError};
use crate::ingest;
use crate::reconcile;
use crate::remote::sheets::SheetsSession;
use crate::remote::Worksheet;
use crate::settings;
use crate::sync;

pub fn run(file: &str, dest_key: &str, spreadsheet_id: Option<&str>) -> Result<()> {
    let dest = destination::find(dest_key)
        .ok_or_else(|| SyncError::UnknownDestination(dest_key.to_string()))?;
    if dest.mode != SyncMode::Append {
        return Err(SyncError::OverwriteOnly(dest.key));
    }

    let upload = ingest::prepare_upload(dest, Path::new(file))?;
    if let Some(marker) = &upload.marker {
        println!(
            "Period from filename: month {}/{} (Q{})",
            marker.month, marker.year, marker.quarter
        );
    }
    println!(
        "Parsed {file}: {} rows, {} columns",
        upload.table.row_count(),
        upload.table.column_count()
    );

    let id = settings::resolve_spreadsheet_id(spreadsheet_id)?;
    let credentials = settings::resolve_credentials()?;
    let session = SheetsSession::connect(&credentials, &id)?;
    let mut ws = session.open(dest.worksheet)?;

    let existing = sync::data_row_count(&ws)?;
    println!("'{}' holds {existing} data rows", dest.worksheet);

    let table = if dest.reconcile {
        let header = ws.header()?;
        if header.is_empty() {
            upload.table
        } else {
            let reconciled = reconcile::reconcile(&upload.table, &header, dest.worksheet)?;
            debug!(
                "column mapping: {:?} -> {:?}",
                reconciled.matched_source, reconciled.matched_destination
            );
            println!(
                "Matched {} of {} destination columns",
                reconciled.matched_destination.len(),
                header.iter().filter(|h| !h.trim().is_empty()).count()
            );
            reconciled.table
        }
    } else {
        upload.table
    };

    sync::append(&mut ws, &table)?;
    let now = sync::data_row_count(&ws)?;
    println!(
        "{} Appended {} rows to '{}' ({now} total)",
        "Done.".green().bold(),
        now.saturating_sub(existing),
        dest.worksheet
    );
    Ok(())
}
