use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Worksheet not found in spreadsheet: {0}")]
    RangeNotFound(String),

    #[error("Cannot parse upload: {0}")]
    Parse(String),

    #[error("No reporting period found in filename: {0}")]
    PeriodNotFound(String),

    #[error("No upload columns match the '{0}' header row")]
    NoColumnMatch(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Unknown destination: {0} (see `sheetsync destinations`)")]
    UnknownDestination(String),

    #[error("{file}: expected {expected} for this destination")]
    UnsupportedExtension { file: String, expected: String },

    #[error("Destination '{0}' is overwrite-mode; use `sheetsync push`")]
    OverwriteOnly(&'static str),

    #[error("Destination '{0}' is append-mode; use `sheetsync append`")]
    AppendOnly(&'static str),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
