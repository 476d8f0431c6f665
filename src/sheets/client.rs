// src/sheets/client.rs

use crate::sheets::auth::{ServiceAccount, TokenSource, TOKEN_URL};
use crate::sheets::rows::SheetRow;
use crate::sheets::{RowSink, SheetsError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    /// A1 range the rows are appended to, e.g. "Sheet1!A:P".
    pub range: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendBody<'a> {
    major_dimension: &'static str,
    values: &'a [SheetRow],
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: Option<usize>,
}

/// Appends rows to a Google Sheet as a service account.
pub struct GoogleSheetsClient {
    cfg: SheetsConfig,
    tokens: TokenSource,
    client: Client,
    api_base: String,
}

impl GoogleSheetsClient {
    pub fn new(cfg: SheetsConfig, account: ServiceAccount) -> Result<Self, SheetsError> {
        Self::with_endpoints(cfg, account, SHEETS_API_BASE, TOKEN_URL)
    }

    /// Same client pointed at other hosts, e.g. a local mock server.
    pub fn with_endpoints(
        cfg: SheetsConfig,
        account: ServiceAccount,
        api_base: &str,
        token_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| SheetsError::Request(e.to_string()))?;

        Ok(Self {
            tokens: TokenSource::with_token_url(account, client.clone(), token_url),
            client,
            cfg,
            api_base: api_base.to_string(),
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append?...`
    pub fn append_url(&self) -> Result<Url, SheetsError> {
        let mut url =
            Url::parse(&self.api_base).map_err(|e| SheetsError::Request(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Request("API base cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.cfg.spreadsheet_id.as_str(), "values"])
            .push(&format!("{}:append", self.cfg.range));
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }
}

impl RowSink for GoogleSheetsClient {
    fn append_rows(&self, rows: &[SheetRow]) -> Result<usize, SheetsError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let token = self.tokens.access_token()?;
        let url = self.append_url()?;

        let resp = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&AppendBody {
                major_dimension: "ROWS",
                values: rows,
            })
            .send()
            .map_err(SheetsError::from_transport)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SheetsError::Api { status, body });
        }

        // The append already happened; an unreadable body is not a failure.
        let parsed: AppendResponse = resp.json().unwrap_or_default();
        Ok(parsed
            .updates
            .and_then(|u| u.updated_rows)
            .unwrap_or(rows.len()))
    }
}
