pub mod assets;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

pub use assets::{css_response, MAIN_CSS};
pub use html::html_response;
pub use json::json_response;
