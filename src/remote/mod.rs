#[cfg(test)]
pub mod memory;
#[cfg(feature = "remote")]
pub mod sheets;

use crate::error::Result;
use crate::table::Table;

/// What the sync protocol needs from a destination worksheet. The remote
/// service only ever returns populated rows, so `rows` and `header` come
/// back trimmed of trailing blanks.
pub trait Worksheet {
    /// Every populated row, header included. Row 1 is the header when the
    /// worksheet has one.
    fn rows(&self) -> Result<Vec<Vec<String>>>;

    /// The header row (row 1), empty when the worksheet holds nothing.
    fn header(&self) -> Result<Vec<String>>;

    /// Drop all content.
    fn clear(&mut self) -> Result<()>;

    /// Write the table starting at `start_row` (1-based), optionally with
    /// its header row first.
    fn write(&mut self, table: &Table, start_row: usize, include_header: bool) -> Result<()>;
}
