use std::path::Path;

use colored::Colorize;

use crate::destination::{self, SyncMode};
use crate::error::{Result, SyncError};
use crate::ingest;
use crate::remote::sheets::SheetsSession;
use crate::settings;
use crate::sync;

pub fn run(file: &str, dest_key: &str, spreadsheet_id: Option<&str>) -> Result<()> {
    let dest = destination::find(dest_key)
        .ok_or_else(|| SyncError::UnknownDestination(dest_key.to_string()))?;
    if dest.mode != SyncMode::Overwrite {
        return Err(SyncError::AppendOnly(dest.key));
    }

    let upload = ingest::prepare_upload(dest, Path::new(file))?;
    println!(
        "Parsed {file}: {} rows, {} columns",
        upload.table.row_count(),
        upload.table.column_count()
    );

    let id = settings::resolve_spreadsheet_id(spreadsheet_id)?;
    let credentials = settings::resolve_credentials()?;
    let session = SheetsSession::connect(&credentials, &id)?;
    let mut ws = session.open(dest.worksheet)?;

    let written = sync::overwrite(&mut ws, &upload.table)?;
    println!(
        "{} Replaced '{}' with {written} rows",
        "Done.".green().bold(),
        dest.worksheet
    );
    Ok(())
}
