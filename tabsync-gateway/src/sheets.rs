//! [`SheetGateway`] over the Google Sheets v4 REST API.
//!
//! - fetch: `GET /v4/spreadsheets/{id}?ranges='Tab'!1:1&includeGridData=true`
//! - write: `PUT /v4/spreadsheets/{id}/values/'Tab'!A1:C1?valueInputOption=RAW`
//!
//! The API answers 400 when a range names a tab that does not exist; that is
//! mapped to `exists = false`.

use serde::Deserialize;
use serde_json::json;

use tabsync_core::{RemoteTabState, TabName};

use crate::auth::AccessToken;
use crate::error::GatewayError;
use crate::gateway::SheetGateway;
use crate::{http, range};

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

const FETCH_FIELDS: &str = "sheets(properties.title,data.rowData.values.formattedValue)";

// ---------------------------------------------------------------------------
// Wire types (only the fields selected by FETCH_FIELDS)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    #[serde(default)]
    properties: SheetProperties,
    #[serde(default)]
    data: Vec<GridData>,
}

#[derive(Debug, Default, Deserialize)]
struct SheetProperties {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridData {
    #[serde(default)]
    row_data: Vec<RowData>,
}

#[derive(Debug, Deserialize)]
struct RowData {
    #[serde(default)]
    values: Vec<CellData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellData {
    #[serde(default)]
    formatted_value: Option<String>,
}

// ---------------------------------------------------------------------------
// GoogleSheets
// ---------------------------------------------------------------------------

/// Authenticated Sheets API client.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    agent: ureq::Agent,
    base_url: String,
    token: AccessToken,
}

impl GoogleSheets {
    pub fn new(token: AccessToken) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Point the client at another host (tests use a local mock server).
    pub fn with_base_url(token: AccessToken, base_url: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        )
    }
}

impl SheetGateway for GoogleSheets {
    fn fetch_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
    ) -> Result<RemoteTabState, GatewayError> {
        let range = range::header_row(tab);
        tracing::debug!("GET header row {range} of {spreadsheet_id}");
        let response = self
            .agent
            .get(&self.spreadsheet_url(spreadsheet_id))
            .set("Authorization", &self.token.bearer())
            .query("ranges", &range)
            .query("includeGridData", "true")
            .query("fields", FETCH_FIELDS)
            .call();

        let response = match response {
            Ok(r) => r,
            Err(ureq::Error::Status(400, r)) => {
                tracing::debug!("range {range} rejected: {}", http::error_message(r));
                return Ok(RemoteTabState::missing());
            }
            Err(e) => return Err(http::gateway_error(e)),
        };

        let body: Spreadsheet = response
            .into_json()
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(extract_header(body, tab))
    }

    fn write_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
        columns: &[String],
    ) -> Result<(), GatewayError> {
        let range = range::header_cells(tab, columns.len());
        let url = format!(
            "{}/values/{}",
            self.spreadsheet_url(spreadsheet_id),
            urlencoding::encode(&range)
        );
        tracing::debug!("PUT {range} of {spreadsheet_id}");
        self.agent
            .put(&url)
            .set("Authorization", &self.token.bearer())
            .query("valueInputOption", "RAW")
            .send_json(json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [columns],
            }))
            .map_err(http::gateway_error)?;
        Ok(())
    }
}

fn extract_header(body: Spreadsheet, tab: &TabName) -> RemoteTabState {
    let Some(sheet) = body
        .sheets
        .into_iter()
        .find(|s| s.properties.title == tab.as_str())
    else {
        return RemoteTabState::missing();
    };

    let cells = sheet
        .data
        .into_iter()
        .next()
        .and_then(|grid| grid.row_data.into_iter().next())
        .map(|row| row.values)
        .unwrap_or_default();

    RemoteTabState::with_header(
        cells
            .into_iter()
            .map(|c| c.formatted_value.unwrap_or_default()),
    )
}
