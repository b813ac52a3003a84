use crate::augment::MarkerPlacement;
use crate::ingest::SourceFormat;
use crate::period::FilenamePattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Clear the worksheet and rewrite it, header included.
    Overwrite,
    /// Add rows beneath the existing data, preserving the header row.
    Append,
}

impl SyncMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Append => "append",
        }
    }
}

/// One configured upload target: which worksheet it lands on and how its
/// files are handled on the way there.
#[derive(Debug, Clone, Copy)]
pub struct Destination {
    pub key: &'static str,
    pub worksheet: &'static str,
    pub mode: SyncMode,
    pub format: SourceFormat,
    pub extensions: &'static [&'static str],
    /// Filename shape the reporting period is read from, for destinations
    /// that stamp Quarter/Month columns.
    pub period: Option<FilenamePattern>,
    pub placement: Option<MarkerPlacement>,
    /// Project uploads onto the worksheet's live header before appending.
    pub reconcile: bool,
}

impl Destination {
    pub fn accepts(&self, filename: &str) -> bool {
        self.extensions.iter().any(|ext| filename.ends_with(ext))
    }
}

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        key: "inventory",
        worksheet: "Inventory",
        mode: SyncMode::Overwrite,
        format: SourceFormat::Delimited,
        extensions: &[".txt"],
        period: None,
        placement: None,
        reconcile: false,
    },
    Destination {
        key: "asin",
        worksheet: "T. ASIN",
        mode: SyncMode::Overwrite,
        format: SourceFormat::Workbook,
        extensions: &[".xlsx", ".xls"],
        period: None,
        placement: None,
        reconcile: false,
    },
    Destination {
        key: "launching",
        worksheet: "T. Launching",
        mode: SyncMode::Overwrite,
        format: SourceFormat::Workbook,
        extensions: &[".xlsx", ".xls"],
        period: None,
        placement: None,
        reconcile: false,
    },
    Destination {
        key: "sellerboard",
        worksheet: "SB_US_2025",
        mode: SyncMode::Append,
        format: SourceFormat::Workbook,
        extensions: &[".xlsx", ".xls"],
        period: Some(FilenamePattern::DateSpan),
        placement: Some(MarkerPlacement::Leading),
        reconcile: false,
    },
    Destination {
        key: "brand-analytics",
        worksheet: "BA_US_2025",
        mode: SyncMode::Append,
        format: SourceFormat::PreambleCsv,
        extensions: &[".csv"],
        period: Some(FilenamePattern::DatedCsv),
        placement: Some(MarkerPlacement::Trailing),
        reconcile: true,
    },
];

pub fn find(key: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.key == key)
}
