pub mod form;
pub mod form_body;
pub mod handlers;

pub use form::{FormStatus, SignupForm, MAX_PROPERTIES};
pub use form_body::{parse_field_query, parse_signup_body, FormAction};
