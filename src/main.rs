mod augment;
mod cli;
mod destination;
mod error;
mod ingest;
mod period;
mod reconcile;
mod remote;
mod settings;
mod sync;
mod table;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            spreadsheet_id,
            credentials,
        } => cli::init::run(spreadsheet_id, credentials),
        #[cfg(feature = "remote")]
        Commands::Connect { spreadsheet_id } => cli::connect::run(spreadsheet_id.as_deref()),
        Commands::Destinations => cli::destinations::run(),
        Commands::Preview { file, dest, rows } => cli::preview::run(&file, &dest, rows),
        #[cfg(feature = "remote")]
        Commands::Push {
            file,
            dest,
            spreadsheet_id,
        } => cli::push::run(&file, &dest, spreadsheet_id.as_deref()),
        #[cfg(feature = "remote")]
        Commands::Append {
            file,
            dest,
            spreadsheet_id,
        } => cli::append::run(&file, &dest, spreadsheet_id.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
