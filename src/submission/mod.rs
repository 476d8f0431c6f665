mod pipeline;
mod submitter;

pub use pipeline::{accept_draft, append_lead};
pub use submitter::{DirectSubmitter, HttpSubmitter, LeadSubmitter};

use crate::domain::LeadErrors;
use crate::sheets::SheetsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission failed validation ({} fields)", .0.count())]
    Invalid(LeadErrors),
    #[error("submission rejected by endpoint: {0}")]
    Rejected(String),
    #[error("submission timed out")]
    TimedOut,
    #[error("submission failed: {0}")]
    Unavailable(String),
}

impl From<SheetsError> for SubmitError {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::Timeout => SubmitError::TimedOut,
            other => SubmitError::Unavailable(other.to_string()),
        }
    }
}

/// Body of a successful `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub rows_written: usize,
}

/// Body of a failed `POST /api/submit`. `fields` is only present on 400.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a LeadErrors>,
}

pub const GENERIC_FAILURE: &str = "Failed to submit form";
pub const TIMED_OUT: &str = "Submission timed out";
pub const INVALID: &str = "Invalid submission";
