#[cfg(feature = "remote")]
pub mod append;
#[cfg(feature = "remote")]
pub mod connect;
pub mod destinations;
pub mod init;
pub mod preview;
#[cfg(feature = "remote")]
pub mod push;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sheetsync",
    about = "Push seller analytics exports into a shared Google Sheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record the spreadsheet id and service-account key every sync uses.
    Init {
        /// Spreadsheet id (the long token in the sheet's URL)
        #[arg(long = "spreadsheet-id")]
        spreadsheet_id: Option<String>,
        /// Path to the service-account JSON key file
        #[arg(long)]
        credentials: Option<String>,
    },
    /// Authenticate and check the spreadsheet and its destination tabs.
    #[cfg(feature = "remote")]
    Connect {
        /// Spreadsheet id override (default: configured one)
        #[arg(long = "spreadsheet-id")]
        spreadsheet_id: Option<String>,
    },
    /// List the configured destinations.
    Destinations,
    /// Parse an export and show the first rows without touching the sheet.
    Preview {
        /// Path to the export file
        file: String,
        /// Destination key (see `sheetsync destinations`)
        #[arg(long)]
        dest: String,
        /// Rows to display
        #[arg(long, default_value = "10")]
        rows: usize,
    },
    /// Replace a destination worksheet with the uploaded file.
    #[cfg(feature = "remote")]
    Push {
        /// Path to the export file
        file: String,
        /// Destination key (see `sheetsync destinations`)
        #[arg(long)]
        dest: String,
        /// Spreadsheet id override (default: configured one)
        #[arg(long = "spreadsheet-id")]
        spreadsheet_id: Option<String>,
    },
    /// Append the uploaded file beneath a destination's existing rows.
    #[cfg(feature = "remote")]
    Append {
        /// Path to the export file
        file: String,
        /// Destination key (see `sheetsync destinations`)
        #[arg(long)]
        dest: String,
        /// Spreadsheet id override (default: configured one)
        #[arg(long = "spreadsheet-id")]
        spreadsheet_id: Option<String>,
    },
}
