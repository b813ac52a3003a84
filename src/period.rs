use regex::Regex;

/// Reporting period stamped onto appended rows, derived from the upload's
/// filename rather than its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodMarker {
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
}

impl PeriodMarker {
    pub fn from_month(year: i32, month: u32) -> Option<PeriodMarker> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(PeriodMarker {
            year,
            month,
            quarter: quarter_of(month),
        })
    }
}

pub fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// Filename shapes the exports arrive with. Each destination that stamps a
/// period names the shape its tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenamePattern {
    /// A `DD_MM_YYYY-DD_MM_YYYY` span anywhere in the name; the period is
    /// taken from the first date.
    DateSpan,
    /// A name ending in `YYYY_MM_DD.csv`.
    DatedCsv,
}

impl FilenamePattern {
    pub fn extract(&self, filename: &str) -> Option<PeriodMarker> {
        match self {
            FilenamePattern::DateSpan => extract_date_span(filename),
            FilenamePattern::DatedCsv => extract_dated_csv(filename),
        }
    }
}

fn extract_date_span(filename: &str) -> Option<PeriodMarker> {
    let re = Regex::new(r"(\d{2}_\d{2}_\d{4})-(\d{2}_\d{2}_\d{4})").ok()?;
    let caps = re.captures(filename)?;
    // DD_MM_YYYY; the closing date only validates the span shape.
    let mut parts = caps.get(1)?.as_str().split('_');
    let _day = parts.next()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    PeriodMarker::from_month(year, month)
}

fn extract_dated_csv(filename: &str) -> Option<PeriodMarker> {
    let re = Regex::new(r"(\d{4})_(\d{2})_(\d{2})\.csv$").ok()?;
    let caps = re.captures(filename)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    PeriodMarker::from_month(year, month)
}
