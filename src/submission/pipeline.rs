// src/submission/pipeline.rs

use crate::domain::{Lead, LeadDraft};
use crate::sheets::{lead_rows, RowSink};
use crate::submission::SubmitError;
use chrono::{DateTime, Utc};

/// Shape a validated lead into rows and append them as one batch.
pub fn append_lead(
    sink: &dyn RowSink,
    lead: &Lead,
    submitted_at: DateTime<Utc>,
) -> Result<usize, SubmitError> {
    let rows = lead_rows(lead, submitted_at);

    let written = sink.append_rows(&rows).map_err(|e| {
        tracing::error!(error = %e, rows = rows.len(), "spreadsheet append failed");
        SubmitError::from(e)
    })?;

    tracing::info!(
        rows = written,
        properties = lead.properties.len(),
        "lead appended to sheet"
    );
    Ok(written)
}

/// Re-validate an incoming draft before it reaches the sheet.
pub fn accept_draft(
    sink: &dyn RowSink,
    draft: &LeadDraft,
    submitted_at: DateTime<Utc>,
) -> Result<usize, SubmitError> {
    let lead = draft.validate().map_err(|errors| {
        tracing::warn!(fields = errors.count(), "rejected invalid submission");
        SubmitError::Invalid(errors)
    })?;
    append_lead(sink, &lead, submitted_at)
}
