use crate::api;
use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, ResultResp, MAIN_CSS};
use crate::signup::handlers;
use crate::templates;
use astra::Request;
use std::io::Read;

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/about") => html_response(templates::pages::about_page()),
        ("GET", "/faq") => html_response(templates::pages::faq_page()),
        ("GET", "/contact") => html_response(templates::pages::contact_page()),
        ("GET", "/signup") => handlers::get_signup(app),
        ("POST", "/signup") => handlers::post_signup(req, app),
        ("POST", "/signup/validate") => handlers::post_validate(req),
        ("POST", "/api/submit") => api::post_submit(req, app),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

/// Read the whole body, refusing anything over [`MAX_BODY_BYTES`].
pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

pub fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}
