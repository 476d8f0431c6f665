// src/api/submit.rs

use crate::app::App;
use crate::domain::LeadDraft;
use crate::errors::ResultResp;
use crate::responses::json_response;
use crate::router::read_body;
use crate::submission::{
    accept_draft, ErrorResponse, SubmitError, SubmitResponse, GENERIC_FAILURE, INVALID, TIMED_OUT,
};
use astra::Request;
use chrono::Utc;

/// `POST /api/submit`: validate the JSON lead and append its rows.
pub fn post_submit(mut req: Request, app: &App) -> ResultResp {
    let body = read_body(&mut req)?;

    let draft: LeadDraft = match serde_json::from_slice(&body) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable submission body");
            return json_response(
                400,
                &ErrorResponse {
                    error: "Invalid JSON body",
                    fields: None,
                },
            );
        }
    };

    match accept_draft(app.sink.as_ref(), &draft, Utc::now()) {
        Ok(rows_written) => json_response(
            200,
            &SubmitResponse {
                success: true,
                rows_written,
            },
        ),
        Err(SubmitError::Invalid(errors)) => json_response(
            400,
            &ErrorResponse {
                error: INVALID,
                fields: Some(&errors),
            },
        ),
        Err(SubmitError::TimedOut) => json_response(
            504,
            &ErrorResponse {
                error: TIMED_OUT,
                fields: None,
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "submission failed");
            json_response(
                500,
                &ErrorResponse {
                    error: GENERIC_FAILURE,
                    fields: None,
                },
            )
        }
    }
}
