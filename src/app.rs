// src/app.rs

use crate::config::AppConfig;
use crate::sheets::{GoogleSheetsClient, RowSink, ServiceAccount, SheetsConfig, SheetsError};
use crate::submission::{DirectSubmitter, HttpSubmitter, LeadSubmitter, SubmitError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Sheets(#[from] SheetsError),
    #[error(transparent)]
    Submitter(#[from] SubmitError),
}

/// Shared state handed to every request.
#[derive(Clone)]
pub struct App {
    /// Where `/api/submit` writes rows.
    pub sink: Arc<dyn RowSink>,
    /// What the signup form submits through.
    pub submitter: Arc<dyn LeadSubmitter>,
    pub maps_api_key: Option<String>,
}

impl App {
    /// Form and API share one in-process sink.
    pub fn direct(sink: Arc<dyn RowSink>) -> Self {
        let submitter = Arc::new(DirectSubmitter::new(Arc::clone(&sink)));
        Self {
            sink,
            submitter,
            maps_api_key: None,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, StartupError> {
        let account = ServiceAccount::new(cfg.client_email.clone(), &cfg.private_key_pem)?;
        let sheets = GoogleSheetsClient::new(
            SheetsConfig {
                spreadsheet_id: cfg.spreadsheet_id.clone(),
                range: cfg.range.clone(),
                timeout: cfg.sheets_timeout,
            },
            account,
        )?;
        let mut app = Self::direct(Arc::new(sheets));

        if let Some(endpoint) = &cfg.submit_endpoint {
            tracing::info!(%endpoint, "signup form posts to remote endpoint");
            app.submitter = Arc::new(HttpSubmitter::new(endpoint.clone(), cfg.sheets_timeout)?);
        }
        app.maps_api_key = cfg.maps_api_key.clone();
        Ok(app)
    }
}
