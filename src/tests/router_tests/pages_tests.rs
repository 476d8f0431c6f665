// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn every_public_page_renders() {
    let (app, _) = test_app();

    for (path, marker) in [
        ("/", "Free EV Chargers For Your Property"),
        ("/about", "About Dynachrg"),
        ("/faq", "Frequently Asked Questions"),
        ("/contact", "Office Hours"),
        ("/signup", "Qualify Your Property"),
    ] {
        let resp = handle(get(path), &app).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
        let content_type = resp
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        assert!(content_type.starts_with("text/html"), "{path}");

        let body = body_string(resp);
        assert!(body.contains(marker), "{path} missing {marker}");
        assert!(body.contains(r#"href="/signup""#), "{path} has no nav CTA");
    }
}

#[test]
fn signup_page_starts_with_one_empty_property() {
    let (app, _) = test_app();
    let body = body_string(handle(get("/signup"), &app).unwrap());

    assert_eq!(body.matches(r#"<fieldset class="property""#).count(), 1);
    assert!(body.contains(r#"id="signup-form""#));
    assert!(!body.contains("banner"));
}

#[test]
fn stylesheet_is_served() {
    let (app, _) = test_app();
    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
    assert!(body_string(resp).contains(".field-error"));
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = test_app();
    let err = handle(get("/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn wrong_method_is_not_found() {
    let (app, _) = test_app();
    let err = handle(get("/api/submit"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
