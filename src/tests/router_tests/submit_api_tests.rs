// src/tests/router_tests/submit_api_tests.rs

use crate::router::{handle, MAX_BODY_BYTES};
use crate::errors::ServerError;
use crate::sheets::rows::COLUMN_COUNT;
use crate::tests::utils::{body_string, post, post_json, test_app, test_app_with, FakeSheet};
use serde_json::{json, Value};

fn property(street: &str) -> Value {
    json!({
        "streetAddress": street,
        "city": "Los Angeles",
        "state": "CA",
        "zipCode": "90001",
        "propertyType": "Apartment Building",
        "numberOfUnits": 24,
        "assignedParkingSpaces": "20",
        "guestParkingSpaces": 4,
        "notes": ""
    })
}

fn payload(properties: Vec<Value>) -> Value {
    json!({
        "ownerCompany": "Acme Properties LLC",
        "email": "owner@acme.com",
        "phone": "(555) 123-4567",
        "consent": true,
        "properties": properties
    })
}

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn appends_one_row_per_property() {
    let (app, sheet) = test_app();
    let req = post_json(
        "/api/submit",
        &payload(vec![property("1 First St"), property("2 Second St")]),
    );

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        json_body(resp),
        json!({ "success": true, "rowsWritten": 2 })
    );

    let rows = sheet.rows();
    assert_eq!(sheet.calls(), 1);
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.cells().len(), COLUMN_COUNT);
        assert_eq!(row.cells()[1], json!("Acme Properties LLC"));
        assert_eq!(row.cells()[3], json!("(555) 123-4567"));
        assert_eq!(row.cells()[10], json!(24));
        assert_eq!(row.cells()[14], json!("Yes"));
        assert_eq!(row.cells()[15], json!("New"));
    }
    assert_eq!(rows[0].cells()[5], json!("1 First St"));
    assert_eq!(rows[1].cells()[5], json!("2 Second St"));
    assert_eq!(rows[0].cells()[0], rows[1].cells()[0]);
}

#[test]
fn accepts_single_property_shape() {
    let (app, sheet) = test_app();
    let mut body = property("9 Flat St");
    for (k, v) in [
        ("ownerCompany", json!("Solo Owner")),
        ("email", json!("solo@owner.com")),
        ("phone", json!("5551234567")),
        ("consent", json!(true)),
    ] {
        body[k] = v;
    }

    let resp = handle(post_json("/api/submit", &body), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let rows = sheet.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells()[4], json!("9 Flat St, Los Angeles, CA 90001"));
}

#[test]
fn invalid_submission_is_rejected_with_field_errors() {
    let (app, sheet) = test_app();
    let mut body = payload(vec![property("1 First St")]);
    body["email"] = json!("not-an-email");
    body["properties"][0]["zipCode"] = json!("9000");

    let resp = handle(post_json("/api/submit", &body), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let body = json_body(resp);
    assert_eq!(body["error"], json!("Invalid submission"));
    assert_eq!(body["fields"]["email"], json!("Enter a valid email address"));
    assert_eq!(
        body["fields"]["properties"][0]["zipCode"],
        json!("Enter a 5-digit ZIP or ZIP+4")
    );
    assert_eq!(sheet.calls(), 0);
}

#[test]
fn missing_consent_is_rejected() {
    let (app, sheet) = test_app();
    let mut body = payload(vec![property("1 First St")]);
    body["consent"] = json!(false);

    let resp = handle(post_json("/api/submit", &body), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(json_body(resp)["fields"]["consent"].is_string());
    assert!(sheet.rows().is_empty());
}

#[test]
fn empty_property_list_is_rejected() {
    let (app, sheet) = test_app();
    let resp = handle(post_json("/api/submit", &payload(vec![])), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(sheet.calls(), 0);
}

#[test]
fn malformed_json_is_a_bad_request() {
    let (app, sheet) = test_app();
    let resp = handle(post("/api/submit", "application/json", "{not json"), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["error"], json!("Invalid JSON body"));
    assert_eq!(sheet.calls(), 0);
}

#[test]
fn sheet_failure_returns_generic_error() {
    let (app, _) = test_app_with(FakeSheet::failing());
    let resp = handle(
        post_json("/api/submit", &payload(vec![property("1 First St")])),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 500);
    let body = json_body(resp);
    assert_eq!(body, json!({ "error": "Failed to submit form" }));
}

#[test]
fn sheet_timeout_returns_gateway_timeout() {
    let (app, _) = test_app_with(FakeSheet::timing_out());
    let resp = handle(
        post_json("/api/submit", &payload(vec![property("1 First St")])),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 504);
    assert_eq!(json_body(resp)["error"], json!("Submission timed out"));
}

#[test]
fn oversized_body_is_refused() {
    let (app, sheet) = test_app();
    let big = vec![b' '; MAX_BODY_BYTES as usize + 1];
    let err = handle(post("/api/submit", "application/json", big), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(sheet.calls(), 0);
}
