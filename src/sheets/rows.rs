// src/sheets/rows.rs

use crate::domain::validation::format_phone;
use crate::domain::Lead;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Columns A..P of the lead sheet.
pub const COLUMN_COUNT: usize = 16;

/// Status written into column P for every new row.
pub const NEW_STATUS: &str = "New";

/// One spreadsheet row, serialized as a JSON array of cell values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SheetRow(pub Vec<Value>);

impl SheetRow {
    pub fn cells(&self) -> &[Value] {
        &self.0
    }
}

/// Flatten a lead into one row per property. Owner-level columns are
/// repeated identically on every row.
pub fn lead_rows(lead: &Lead, submitted_at: DateTime<Utc>) -> Vec<SheetRow> {
    let timestamp = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let phone = format_phone(&lead.phone);
    let consent = if lead.consent { "Yes" } else { "No" };

    lead.properties
        .iter()
        .map(|p| {
            SheetRow(vec![
                Value::from(timestamp.as_str()),
                Value::from(lead.owner_company.as_str()),
                Value::from(lead.email.as_str()),
                Value::from(phone.as_str()),
                Value::from(p.combined_address()),
                Value::from(p.street_address.as_str()),
                Value::from(p.city.as_str()),
                Value::from(p.state.as_str()),
                Value::from(p.zip_code.as_str()),
                Value::from(p.property_type.label()),
                Value::from(p.number_of_units),
                Value::from(p.assigned_parking_spaces),
                Value::from(p.guest_parking_spaces),
                Value::from(p.notes.as_deref().unwrap_or("")),
                Value::from(consent),
                Value::from(NEW_STATUS),
            ])
        })
        .collect()
}
