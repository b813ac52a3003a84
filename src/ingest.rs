use std::path::Path;

use calamine::{Data, Reader};

use crate::augment;
use crate::destination::Destination;
use crate::error::{Result, SyncError};
use crate::period::PeriodMarker;
use crate::table::{CellValue, Table};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn excel_serial_to_date(serial: f64) -> String {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let date = base + chrono::Duration::days(serial as i64);
    date.format("%Y-%m-%d").to_string()
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_field(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Str(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Str(excel_serial_to_date(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Str(s.clone()),
        // Cell errors (#N/A and friends) land as blanks
        Data::Error(_) => CellValue::Empty,
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|_| SyncError::Parse(format!("{} is not valid UTF-8", path.display())))
}

// ---------------------------------------------------------------------------
// Source formats: enum dispatch, one parser per export flavor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Plain-text dump, tab-separated with a comma fallback per line.
    Delimited,
    /// First sheet of an Excel workbook, first row as header.
    Workbook,
    /// CSV report with one banner line above the header.
    PreambleCsv,
}

impl SourceFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delimited => "delimited text",
            Self::Workbook => "Excel workbook",
            Self::PreambleCsv => "CSV report",
        }
    }

    pub fn parse(&self, path: &Path) -> Result<Table> {
        match self {
            Self::Delimited => parse_delimited(path),
            Self::Workbook => parse_workbook(path),
            Self::PreambleCsv => parse_preamble_csv(path),
        }
    }
}

// ---------------------------------------------------------------------------
// Delimited text parser
// ---------------------------------------------------------------------------

fn parse_delimited(path: &Path) -> Result<Table> {
    let content = read_text(path)?;
    let content = content.trim();
    if content.is_empty() {
        return Err(SyncError::Parse(format!("{} is empty", path.display())));
    }

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for line in content.lines() {
        let cells: Vec<CellValue> = if line.contains('\t') {
            line.split('\t').map(CellValue::from_field).collect()
        } else if line.contains(',') {
            line.split(',').map(CellValue::from_field).collect()
        } else {
            vec![CellValue::from_field(line)]
        };
        rows.push(cells);
    }

    // Ragged dumps happen; pad every line to the widest one.
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, CellValue::Empty);
    }

    // A single line has nothing to promote to a header; columns get
    // positional names instead.
    if rows.len() == 1 {
        let names = (0..width).map(|i| i.to_string()).collect();
        return Ok(Table::from_rows(names, rows));
    }
    let header = rows.remove(0);
    let names = header.iter().map(|c| c.to_string()).collect();
    Ok(Table::from_rows(names, rows))
}

// ---------------------------------------------------------------------------
// Workbook parser
// ---------------------------------------------------------------------------

fn parse_workbook(path: &Path) -> Result<Table> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| SyncError::Parse(format!("failed to open workbook: {e}")))?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SyncError::Parse("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| SyncError::Parse(format!("failed to read sheet '{first}': {e}")))?;

    let mut rows_iter = range.rows();
    let Some(header) = rows_iter.next() else {
        return Err(SyncError::Parse(format!("sheet '{first}' is empty")));
    };
    let names: Vec<String> = header.iter().map(|c| excel_cell(c).to_string()).collect();
    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(excel_cell).collect())
        .collect();
    Ok(Table::from_rows(names, rows))
}

// ---------------------------------------------------------------------------
// Preamble CSV parser
// ---------------------------------------------------------------------------

fn parse_preamble_csv(path: &Path) -> Result<Table> {
    let content = read_text(path)?;
    // Line 1 is a report banner, not data; the real header follows it.
    let Some(break_at) = content.find('\n') else {
        return Err(SyncError::Parse(format!(
            "{}: no header row after the banner line",
            path.display()
        )));
    };
    let body = &content[break_at + 1..];

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let names: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if names.iter().all(|n| n.is_empty()) {
        return Err(SyncError::Parse(format!(
            "{}: no header row after the banner line",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() > names.len() {
            return Err(SyncError::Parse(format!(
                "{}: line {} has {} fields, header has {}",
                path.display(),
                i + 3,
                record.len(),
                names.len()
            )));
        }
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::from_field).collect();
        cells.resize(names.len(), CellValue::Empty);
        rows.push(cells);
    }
    Ok(Table::from_rows(names, rows))
}

// ---------------------------------------------------------------------------
// prepare_upload
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Upload {
    pub table: Table,
    pub marker: Option<PeriodMarker>,
}

/// Run the full intake pipeline for one file against its destination:
/// extension check, period extraction from the filename, parse, and the
/// period columns stamped on when the destination wants them.
pub fn prepare_upload(dest: &Destination, path: &Path) -> Result<Upload> {
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if !dest.accepts(filename) {
        return Err(SyncError::UnsupportedExtension {
            file: filename.to_string(),
            expected: dest.extensions.join("/"),
        });
    }

    let marker = match dest.period {
        Some(pattern) => Some(
            pattern
                .extract(filename)
                .ok_or_else(|| SyncError::PeriodNotFound(filename.to_string()))?,
        ),
        None => None,
    };

    let mut table = dest.format.parse(path)?;
    if let (Some(marker), Some(placement)) = (&marker, dest.placement) {
        augment::add_period_columns(&mut table, marker, placement);
    }
    Ok(Upload { table, marker })
}
