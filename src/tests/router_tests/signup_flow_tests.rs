// src/tests/router_tests/signup_flow_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_app, test_app_with, FakeSheet};

const OWNER: &str = "owner_company=Acme+LLC&email=owner%40acme.com&phone=555-123-4567";
const PROPERTY_ONE: &str = "street_address=1+A+St&city=Los+Angeles&state=CA&zip_code=90001&\
    property_type=Apartment+Building&number_of_units=12&assigned_parking_spaces=10&\
    guest_parking_spaces=2&notes=";
const PROPERTY_TWO: &str = "street_address=2+B+St&city=Pasadena&state=CA&zip_code=91101&\
    property_type=Condo+Complex&number_of_units=4&assigned_parking_spaces=4&\
    guest_parking_spaces=0&notes=gate+code+12";

fn form_body(parts: &[&str]) -> String {
    parts.join("&")
}

#[test]
fn valid_submission_appends_rows_and_resets_the_form() {
    let (app, sheet) = test_app();
    let body = form_body(&[OWNER, PROPERTY_ONE, PROPERTY_TWO, "consent=on", "action=submit"]);

    let resp = handle(post_form("/signup", &body, true), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(sheet.rows().len(), 2);
    assert!(html.contains("banner success"));
    assert!(html.contains("Your application was received"));
    assert!(!html.contains("Acme LLC"));
    assert_eq!(html.matches(r#"<fieldset class="property""#).count(), 1);
    // A fragment, not a full page.
    assert!(!html.contains("<html"));
}

#[test]
fn plain_post_returns_the_full_page() {
    let (app, _) = test_app();
    let body = form_body(&[OWNER, PROPERTY_ONE, "consent=on", "action=submit"]);

    let html = body_string(handle(post_form("/signup", &body, false), &app).unwrap());
    assert!(html.contains("<html"));
    assert!(html.contains("banner success"));
}

#[test]
fn missing_consent_blocks_submission() {
    let (app, sheet) = test_app();
    let body = form_body(&[OWNER, PROPERTY_ONE, "action=submit"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(sheet.calls(), 0);
    assert!(html.contains("banner error"));
    assert!(html.contains("You must agree to the terms to continue"));
    // Entered values survive.
    assert!(html.contains("Acme LLC"));
}

#[test]
fn sheet_failure_keeps_values_and_shows_retry_message() {
    let (app, sheet) = test_app_with(FakeSheet::failing());
    let body = form_body(&[OWNER, PROPERTY_ONE, "consent=on", "action=submit"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(sheet.calls(), 1);
    assert!(html.contains("banner error"));
    assert!(html.contains("Please try again"));
    assert!(html.contains("Acme LLC"));
    assert!(html.contains("1 A St"));
}

#[test]
fn add_property_appends_an_empty_block_without_validating() {
    let (app, sheet) = test_app();
    let body = form_body(&[OWNER, PROPERTY_ONE, "action=add_property"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(sheet.calls(), 0);
    assert_eq!(html.matches(r#"<fieldset class="property""#).count(), 2);
    assert!(!html.contains("banner"));
    assert!(html.contains("1 A St"));
}

#[test]
fn inline_errors_survive_adding_a_property() {
    let (app, _) = test_app();
    let bad_zip = PROPERTY_ONE.replace("zip_code=90001", "zip_code=9000");
    let body = form_body(&[OWNER, &bad_zip, "action=add_property"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(html.matches(r#"<fieldset class="property""#).count(), 2);
    assert!(html.contains("Enter a 5-digit ZIP or ZIP+4"));
    // The new, empty block is not flagged.
    assert!(!html.contains("This field is required"));
}

#[test]
fn inline_errors_survive_removing_a_property() {
    let (app, _) = test_app();
    let bad_city = PROPERTY_TWO.replace("city=Pasadena", "city=");
    let body = form_body(&[OWNER, PROPERTY_ONE, &bad_city, "action=remove_property:0"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(html.matches(r#"<fieldset class="property""#).count(), 1);
    assert!(html.contains(r#"id="err-zip_code-0""#));
    assert!(!html.contains("This field is required"));

    let bad_zip = PROPERTY_TWO.replace("zip_code=91101", "zip_code=1");
    let body = form_body(&[OWNER, PROPERTY_ONE, &bad_zip, "action=remove_property:0"]);
    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert!(html.contains("Enter a 5-digit ZIP or ZIP+4"));
}

#[test]
fn remove_property_drops_the_chosen_block() {
    let (app, _) = test_app();
    let body = form_body(&[OWNER, PROPERTY_ONE, PROPERTY_TWO, "action=remove_property:0"]);

    let html = body_string(handle(post_form("/signup", &body, true), &app).unwrap());
    assert_eq!(html.matches(r#"<fieldset class="property""#).count(), 1);
    assert!(html.contains("Pasadena"));
    assert!(!html.contains("1 A St"));
}

#[test]
fn blur_returns_only_the_error_slot() {
    let (app, _) = test_app();
    let body = form_body(&["email=nope", PROPERTY_ONE]);

    let resp = handle(post_form("/signup/validate?field=email", &body, true), &app).unwrap();
    let html = body_string(resp);
    assert!(html.contains(r#"id="err-email""#));
    assert!(html.contains("Enter a valid email address"));
    assert!(!html.contains("<fieldset"));
}

#[test]
fn blur_on_second_property_checks_that_property() {
    let (app, _) = test_app();
    let second = PROPERTY_TWO.replace("zip_code=91101", "zip_code=12");
    let body = form_body(&[OWNER, PROPERTY_ONE, &second]);

    let html = body_string(
        handle(post_form("/signup/validate?field=zip_code&index=1", &body, true), &app).unwrap(),
    );
    assert!(html.contains(r#"id="err-zip_code-1""#));
    assert!(html.contains("Enter a 5-digit ZIP or ZIP+4"));

    let html = body_string(
        handle(post_form("/signup/validate?field=zip_code&index=0", &body, true), &app).unwrap(),
    );
    assert!(html.contains(r#"id="err-zip_code-0""#));
    assert!(!html.contains("ZIP+4"));
}

#[test]
fn blur_rejects_unknown_field_or_index() {
    let (app, _) = test_app();
    let err = handle(post_form("/signup/validate?field=favorite_color", "", true), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(
        post_form("/signup/validate?field=city&index=5", PROPERTY_ONE, true),
        &app,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
