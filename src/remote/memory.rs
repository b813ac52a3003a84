use super::Worksheet;
use crate::error::Result;
use crate::table::Table;

/// Grid-backed worksheet for exercising the sync protocol without a network.
#[derive(Debug, Default)]
pub struct MemorySheet {
    grid: Vec<Vec<String>>,
}

impl MemorySheet {
    pub fn new() -> MemorySheet {
        MemorySheet::default()
    }

    pub fn with_rows(rows: &[&[&str]]) -> MemorySheet {
        MemorySheet {
            grid: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }
}

impl Worksheet for MemorySheet {
    fn rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.grid.clone())
    }

    fn header(&self) -> Result<Vec<String>> {
        Ok(self.grid.first().cloned().unwrap_or_default())
    }

    fn clear(&mut self) -> Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn write(&mut self, table: &Table, start_row: usize, include_header: bool) -> Result<()> {
        let mut payload: Vec<Vec<String>> = Vec::new();
        if include_header {
            payload.push(table.header_row());
        }
        payload.extend(table.data_rows());
        for (offset, row) in payload.into_iter().enumerate() {
            let idx = start_row - 1 + offset;
            while self.grid.len() <= idx {
                self.grid.push(Vec::new());
            }
            self.grid[idx] = row;
        }
        Ok(())
    }
}
