use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(css))
        .map_err(|_| ServerError::InternalError)
}
