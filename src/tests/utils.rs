// src/tests/utils.rs

use crate::app::App;
use crate::domain::{LeadDraft, PropertyDraft};
use crate::sheets::{RowSink, SheetRow, SheetsError};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Ok,
    Failing,
    TimingOut,
}

/// In-memory sheet that records appended rows.
pub struct FakeSheet {
    rows: Mutex<Vec<SheetRow>>,
    calls: AtomicUsize,
    mode: Mode,
}

impl FakeSheet {
    pub fn new() -> Self {
        Self::with_mode(Mode::Ok)
    }

    pub fn failing() -> Self {
        Self::with_mode(Mode::Failing)
    }

    pub fn timing_out() -> Self {
        Self::with_mode(Mode::TimingOut)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            mode,
        }
    }

    pub fn rows(&self) -> Vec<SheetRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RowSink for FakeSheet {
    fn append_rows(&self, rows: &[SheetRow]) -> Result<usize, SheetsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            Mode::Ok => {
                self.rows.lock().unwrap().extend_from_slice(rows);
                Ok(rows.len())
            }
            Mode::Failing => Err(SheetsError::Api {
                status: 403,
                body: "permission denied".into(),
            }),
            Mode::TimingOut => Err(SheetsError::Timeout),
        }
    }
}

/// A draft that passes validation with one property.
pub fn sample_draft() -> LeadDraft {
    LeadDraft {
        owner_company: "Acme Properties LLC".into(),
        email: "a@b.com".into(),
        phone: "555-123-4567".into(),
        consent: true,
        properties: vec![PropertyDraft {
            street_address: "123 Main St".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip_code: "90001".into(),
            property_type: "Apartment Building".into(),
            number_of_units: "24".into(),
            assigned_parking_spaces: "20".into(),
            guest_parking_spaces: "4".into(),
            notes: String::new(),
        }],
    }
}

/// App wired to a fresh in-memory sheet.
pub fn test_app_with(sheet: FakeSheet) -> (App, Arc<FakeSheet>) {
    let sheet = Arc::new(sheet);
    (App::direct(sheet.clone()), sheet)
}

pub fn test_app() -> (App, Arc<FakeSheet>) {
    test_app_with(FakeSheet::new())
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post(uri: &str, content_type: &str, body: impl Into<Vec<u8>>) -> Request {
    let mut req = Request::new(Body::from(body.into()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut()
        .insert("Content-Type", content_type.parse().unwrap());
    req
}

pub fn post_json(uri: &str, value: &serde_json::Value) -> Request {
    post(uri, "application/json", serde_json::to_vec(value).unwrap())
}

pub fn post_form(uri: &str, body: &str, htmx: bool) -> Request {
    let mut req = post(uri, "application/x-www-form-urlencoded", body);
    if htmx {
        req.headers_mut().insert("HX-Request", "true".parse().unwrap());
    }
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
