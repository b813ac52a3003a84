use std::future::Future;
use std::path::Path;

use google_sheets4::api::{ClearValuesRequest, ValueRange};
use google_sheets4::{hyper_rustls, yup_oauth2, Sheets};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use log::{debug, info};
use tokio::runtime::Runtime;

use super::Worksheet;
use crate::error::{Result, SyncError};
use crate::table::Table;

type Hub = Sheets<hyper_rustls::HttpsConnector<HttpConnector>>;

const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

/// Authenticated handle to one remote spreadsheet, created once per run.
/// The API bindings are async; the session owns a runtime and blocks on
/// each call, so everything above this layer stays synchronous.
pub struct SheetsSession {
    runtime: Runtime,
    hub: Hub,
    spreadsheet_id: String,
    title: String,
}

impl SheetsSession {
    /// Authenticate with a service-account key file and verify the
    /// spreadsheet is reachable before anything gets written.
    pub fn connect(credentials: &Path, spreadsheet_id: &str) -> Result<SheetsSession> {
        let runtime = Runtime::new()?;
        let hub = runtime.block_on(build_hub(credentials))?;
        let title = runtime.block_on(async {
            let (_, spreadsheet) = hub
                .spreadsheets()
                .get(spreadsheet_id)
                .doit()
                .await
                .map_err(|e| {
                    SyncError::Remote(format!("cannot open spreadsheet '{spreadsheet_id}': {e}"))
                })?;
            Ok::<_, SyncError>(
                spreadsheet
                    .properties
                    .and_then(|p| p.title)
                    .unwrap_or_else(|| spreadsheet_id.to_string()),
            )
        })?;
        info!("connected to spreadsheet '{title}'");
        Ok(SheetsSession {
            runtime,
            hub,
            spreadsheet_id: spreadsheet_id.to_string(),
            title,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Worksheet titles currently present in the spreadsheet.
    pub fn worksheet_titles(&self) -> Result<Vec<String>> {
        let (_, spreadsheet) = self.run(
            "fetch spreadsheet metadata",
            self.hub.spreadsheets().get(&self.spreadsheet_id).doit(),
        )?;
        Ok(spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|p| p.title))
            .collect())
    }

    /// Open a worksheet by title. Fails when the tab does not exist, so a
    /// sync never creates (or silently misses) its target.
    pub fn open(&self, title: &str) -> Result<SheetsWorksheet<'_>> {
        let titles = self.worksheet_titles()?;
        if !titles.iter().any(|t| t == title) {
            return Err(SyncError::RangeNotFound(title.to_string()));
        }
        Ok(SheetsWorksheet {
            session: self,
            title: title.to_string(),
        })
    }

    fn run<T>(
        &self,
        description: &str,
        fut: impl Future<Output = std::result::Result<T, google_sheets4::Error>>,
    ) -> Result<T> {
        self.runtime
            .block_on(fut)
            .map_err(|e| SyncError::Remote(format!("{description} failed: {e}")))
    }
}

async fn build_hub(credentials: &Path) -> Result<Hub> {
    let key = yup_oauth2::read_service_account_key(credentials)
        .await
        .map_err(|e| {
            SyncError::Auth(format!(
                "cannot read service account key {}: {e}",
                credentials.display()
            ))
        })?;
    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| SyncError::Auth(format!("service account setup failed: {e}")))?;
    // Fetch a token up front so bad credentials fail here, not mid-sync.
    auth.token(SCOPES)
        .await
        .map_err(|e| SyncError::Auth(e.to_string()))?;
    debug!("service account token obtained");

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| SyncError::Auth(format!("TLS setup failed: {e}")))?
        .https_or_http()
        .enable_http1()
        .build();
    let client = hyper_util::client::legacy::Client::builder(TokioExecutor::new()).build(connector);
    Ok(Sheets::new(client, auth))
}

/// A1 range strings quote the sheet title; embedded quotes double up.
fn quote_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub struct SheetsWorksheet<'a> {
    session: &'a SheetsSession,
    title: String,
}

impl SheetsWorksheet<'_> {
    fn range_all(&self) -> String {
        quote_title(&self.title)
    }

    fn range_header(&self) -> String {
        format!("{}!1:1", quote_title(&self.title))
    }

    fn range_from_row(&self, row: usize) -> String {
        format!("{}!A{row}", quote_title(&self.title))
    }
}

impl Worksheet for SheetsWorksheet<'_> {
    fn rows(&self) -> Result<Vec<Vec<String>>> {
        let (_, value_range) = self.session.run(
            "read worksheet",
            self.session
                .hub
                .spreadsheets()
                .values_get(&self.session.spreadsheet_id, &self.range_all())
                .value_render_option("FORMATTED_VALUE")
                .doit(),
        )?;
        Ok(value_range
            .values
            .unwrap_or_default()
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    fn header(&self) -> Result<Vec<String>> {
        let (_, value_range) = self.session.run(
            "read header row",
            self.session
                .hub
                .spreadsheets()
                .values_get(&self.session.spreadsheet_id, &self.range_header())
                .value_render_option("FORMATTED_VALUE")
                .doit(),
        )?;
        let mut header: Vec<String> = value_range
            .values
            .unwrap_or_default()
            .into_iter()
            .next()
            .unwrap_or_default()
            .iter()
            .map(cell_to_string)
            .collect();
        // The API pads short reads; blanks at the end are not columns.
        while header.last().map(|c| c.trim().is_empty()).unwrap_or(false) {
            header.pop();
        }
        Ok(header)
    }

    fn clear(&mut self) -> Result<()> {
        self.session.run(
            "clear worksheet",
            self.session
                .hub
                .spreadsheets()
                .values_clear(
                    ClearValuesRequest::default(),
                    &self.session.spreadsheet_id,
                    &self.range_all(),
                )
                .doit(),
        )?;
        debug!("cleared '{}'", self.title);
        Ok(())
    }

    fn write(&mut self, table: &Table, start_row: usize, include_header: bool) -> Result<()> {
        let mut rows: Vec<Vec<serde_json::Value>> = Vec::new();
        if include_header {
            rows.push(
                table
                    .header_row()
                    .into_iter()
                    .map(serde_json::Value::String)
                    .collect(),
            );
        }
        for row in table.data_rows() {
            rows.push(row.into_iter().map(serde_json::Value::String).collect());
        }
        if rows.is_empty() {
            return Ok(());
        }

        let range = self.range_from_row(start_row);
        let body = ValueRange {
            range: Some(range.clone()),
            values: Some(rows),
            major_dimension: Some("ROWS".to_string()),
            ..Default::default()
        };
        let (_, response) = self.session.run(
            "write worksheet values",
            self.session
                .hub
                .spreadsheets()
                .values_update(body, &self.session.spreadsheet_id, &range)
                .value_input_option("USER_ENTERED")
                .doit(),
        )?;
        debug!(
            "wrote {} cells to '{}'",
            response.updated_cells.unwrap_or(0),
            self.title
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_with_quotes_are_escaped() {
        assert_eq!(quote_title("T. ASIN"), "'T. ASIN'");
        assert_eq!(quote_title("Bob's Data"), "'Bob''s Data'");
    }

    #[test]
    fn json_cells_render_as_plain_strings() {
        assert_eq!(cell_to_string(&serde_json::json!("x")), "x");
        assert_eq!(cell_to_string(&serde_json::json!(7)), "7");
        assert_eq!(cell_to_string(&serde_json::json!(true)), "true");
        assert_eq!(cell_to_string(&serde_json::Value::Null), "");
    }
}
