use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(spreadsheet_id: Option<String>, credentials: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(id) = spreadsheet_id {
        settings.spreadsheet_id = id.trim().to_string();
    } else if settings.spreadsheet_id.is_empty() {
        println!("Spreadsheet id (from the sheet URL): ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        settings.spreadsheet_id = input.trim().to_string();
    }

    if let Some(path) = credentials {
        settings.credentials_path = shellexpand_path(path.trim());
    } else if settings.credentials_path.is_empty() {
        println!("Path to service-account key [credentials.json]: ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        settings.credentials_path = if chosen.is_empty() {
            shellexpand_path("credentials.json")
        } else {
            shellexpand_path(chosen)
        };
    }

    save_settings(&settings)?;
    println!("Settings written to {}", settings_path().display());
    Ok(())
}
