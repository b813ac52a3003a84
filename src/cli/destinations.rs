use comfy_table::{Cell, Table};

use crate::destination::DESTINATIONS;
use crate::error::Result;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Worksheet", "Mode", "Accepts", "Reads", "Period columns"]);
    for dest in DESTINATIONS {
        let period = match dest.period {
            Some(_) => "Quarter + Month",
            None => "",
        };
        table.add_row(vec![
            Cell::new(dest.key),
            Cell::new(dest.worksheet),
            Cell::new(dest.mode.label()),
            Cell::new(dest.extensions.join(" ")),
            Cell::new(dest.format.label()),
            Cell::new(period),
        ]);
    }
    println!("Destinations\n{table}");
    Ok(())
}
