use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::error::{Result, SyncError};
use crate::table::{CellValue, Table};

/// Column name as a reconciliation key: equality and hashing fold case,
/// the original spelling stays around for display.
#[derive(Debug, Clone)]
pub struct ColumnKey {
    original: String,
    folded: String,
}

impl ColumnKey {
    pub fn new(name: &str) -> ColumnKey {
        ColumnKey {
            original: name.to_string(),
            folded: name.to_lowercase(),
        }
    }

    #[allow(dead_code)]
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl PartialEq for ColumnKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for ColumnKey {}

impl Hash for ColumnKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

/// Result of projecting an upload onto a destination header.
#[derive(Debug)]
pub struct Reconciled {
    /// The projected table: every non-blank destination column in
    /// destination order, unmatched ones empty, carrying the destination's
    /// spelling of each name.
    pub table: Table,
    /// Destination names that found an upload column, in destination order.
    pub matched_destination: Vec<String>,
    /// The upload's spelling of each matched column, same order.
    pub matched_source: Vec<String>,
}

/// Line an upload up with the destination's header row. Matching is
/// case-insensitive; when the upload has several columns folding to the same
/// name the first one wins. Fails when not a single column matches, so a
/// wrong file never lands as a sheet of blanks.
pub fn reconcile(table: &Table, headers: &[String], destination: &str) -> Result<Reconciled> {
    let mut by_key: HashMap<ColumnKey, usize> = HashMap::new();
    for (idx, column) in table.columns().iter().enumerate() {
        by_key.entry(ColumnKey::new(&column.name)).or_insert(idx);
    }

    let rows = table.row_count();
    let mut out = Table::new();
    let mut matched_destination = Vec::new();
    let mut matched_source = Vec::new();
    for header in headers {
        if header.trim().is_empty() {
            continue;
        }
        match by_key.get(&ColumnKey::new(header)) {
            Some(&idx) => {
                let column = &table.columns()[idx];
                out.push_column(header.clone(), column.cells.clone());
                matched_destination.push(header.clone());
                matched_source.push(column.name.clone());
            }
            None => out.push_column(header.clone(), vec![CellValue::Empty; rows]),
        }
    }

    if matched_destination.is_empty() {
        return Err(SyncError::NoColumnMatch(destination.to_string()));
    }
    Ok(Reconciled {
        table: out,
        matched_destination,
        matched_source,
    })
}
