use colored::Colorize;

use crate::destination::DESTINATIONS;
use crate::error::Result;
use crate::remote::sheets::SheetsSession;
use crate::settings;

pub fn run(spreadsheet_id: Option<&str>) -> Result<()> {
    let id = settings::resolve_spreadsheet_id(spreadsheet_id)?;
    let credentials = settings::resolve_credentials()?;
    let session = SheetsSession::connect(&credentials, &id)?;
    println!("Connected to '{}'", session.title().green().bold());

    let titles = session.worksheet_titles()?;
    println!("Destination worksheets:");
    for dest in DESTINATIONS {
        let status = if titles.iter().any(|t| t == dest.worksheet) {
            "found".green()
        } else {
            "missing".yellow()
        };
        println!("  {:<14} {status}", dest.worksheet);
    }
    Ok(())
}
