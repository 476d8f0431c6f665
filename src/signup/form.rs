// src/signup/form.rs

use crate::domain::{FieldId, LeadDraft, LeadErrors, OwnerField, PropertyDraft, PropertyField};
use crate::submission::{LeadSubmitter, SubmitError};

/// Most properties a single application can carry.
pub const MAX_PROPERTIES: usize = 20;

pub const INVALID_MESSAGE: &str = "Please correct the highlighted fields and try again.";
pub const RETRY_MESSAGE: &str =
    "We couldn't submit your application right now. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// State of one signup form: field values, per-field errors and status.
///
/// ```text
/// idle --submit(valid)--> submitting --ok--> success
/// submitting --fail--> error --submit--> submitting
/// idle --submit(invalid)--> error
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub values: LeadDraft,
    pub errors: LeadErrors,
    pub status: FormStatus,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::from_draft(LeadDraft::default())
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(values: LeadDraft) -> Self {
        Self {
            values,
            errors: LeadErrors::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Re-check one field; no other error entry changes.
    pub fn blur(&mut self, field: FieldId) {
        let error = self.values.check(field);
        self.errors.set(field, error);
    }

    /// Re-check every field that already holds input. Untouched fields stay
    /// clear, so a freshly added property block shows no errors.
    pub fn recheck_filled(&mut self) {
        let values = &self.values;
        let mut filled: Vec<FieldId> = [
            (OwnerField::OwnerCompany, &values.owner_company),
            (OwnerField::Email, &values.email),
            (OwnerField::Phone, &values.phone),
        ]
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(f, _)| FieldId::Owner(f))
        .collect();

        for (i, p) in values.properties.iter().enumerate() {
            filled.extend(
                PropertyField::ALL
                    .into_iter()
                    .filter(|f| !p.value(*f).trim().is_empty())
                    .map(|f| FieldId::Property(i, f)),
            );
        }

        for field in filled {
            self.blur(field);
        }
    }

    pub fn add_property(&mut self) -> bool {
        if self.values.properties.len() >= MAX_PROPERTIES {
            return false;
        }
        self.values.properties.push(PropertyDraft::default());
        true
    }

    /// The last remaining property cannot be removed.
    pub fn remove_property(&mut self, index: usize) -> bool {
        if self.values.properties.len() <= 1 || index >= self.values.properties.len() {
            return false;
        }
        self.values.properties.remove(index);
        if index < self.errors.properties.len() {
            self.errors.properties.remove(index);
        }
        true
    }

    pub fn submit(&mut self, submitter: &dyn LeadSubmitter) -> &FormStatus {
        if self.is_submitting() {
            return &self.status;
        }

        let lead = match self.values.validate() {
            Ok(lead) => lead,
            Err(errors) => {
                self.errors = errors;
                self.status = FormStatus::Error(INVALID_MESSAGE.to_string());
                return &self.status;
            }
        };

        self.errors = LeadErrors::default();
        self.status = FormStatus::Submitting;

        self.status = match submitter.submit(&lead) {
            Ok(rows) => {
                tracing::info!(rows, "signup submitted");
                self.values = LeadDraft::default();
                FormStatus::Success
            }
            Err(SubmitError::Invalid(errors)) => {
                self.errors = errors;
                FormStatus::Error(INVALID_MESSAGE.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "signup submission failed");
                FormStatus::Error(RETRY_MESSAGE.to_string())
            }
        };
        &self.status
    }
}
