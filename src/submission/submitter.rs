// src/submission/submitter.rs

use crate::domain::Lead;
use crate::sheets::RowSink;
use crate::submission::{append_lead, SubmitError, SubmitResponse};
use chrono::Utc;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// What the signup form calls once a lead validates.
pub trait LeadSubmitter: Send + Sync {
    /// Returns the number of rows the sheet accepted.
    fn submit(&self, lead: &Lead) -> Result<usize, SubmitError>;
}

/// Runs the submission pipeline in the same process.
pub struct DirectSubmitter {
    sink: Arc<dyn RowSink>,
}

impl DirectSubmitter {
    pub fn new(sink: Arc<dyn RowSink>) -> Self {
        Self { sink }
    }
}

impl LeadSubmitter for DirectSubmitter {
    fn submit(&self, lead: &Lead) -> Result<usize, SubmitError> {
        append_lead(self.sink.as_ref(), lead, Utc::now())
    }
}

/// Posts the lead as JSON to a `/api/submit` endpoint.
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Unavailable(e.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

impl LeadSubmitter for HttpSubmitter {
    fn submit(&self, lead: &Lead) -> Result<usize, SubmitError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(lead)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::TimedOut
                } else {
                    SubmitError::Unavailable(e.to_string())
                }
            })?;

        let status = resp.status();
        if status.is_success() {
            let body: SubmitResponse = resp
                .json()
                .map_err(|e| SubmitError::Unavailable(format!("unreadable response: {e}")))?;
            return Ok(body.rows_written);
        }

        let message = resp
            .json::<ErrorBody>()
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string());

        Err(match status.as_u16() {
            400 => SubmitError::Rejected(message),
            504 => SubmitError::TimedOut,
            _ => SubmitError::Unavailable(message),
        })
    }
}
