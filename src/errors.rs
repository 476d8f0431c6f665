// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, malformed requests) or from rendering a response.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
