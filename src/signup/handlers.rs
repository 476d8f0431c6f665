// src/signup/handlers.rs

use crate::app::App;
use crate::domain::FieldId;
use crate::errors::{ResultResp, ServerError};
use crate::responses::html_response;
use crate::router::{is_htmx, read_body};
use crate::signup::{parse_field_query, parse_signup_body, FormAction, SignupForm};
use crate::templates::components::fields::field_error;
use crate::templates::pages::{signup_form, signup_page};
use astra::Request;

pub fn get_signup(app: &App) -> ResultResp {
    html_response(signup_page(&SignupForm::new(), app.maps_api_key.as_deref()))
}

/// `POST /signup`: one of submit, add property or remove property.
/// htmx requests get the form fragment back, plain posts the whole page.
pub fn post_signup(mut req: Request, app: &App) -> ResultResp {
    let htmx = is_htmx(&req);
    let posted = parse_signup_body(&read_body(&mut req)?);
    let mut form = SignupForm::from_draft(posted.draft);

    match posted.action {
        FormAction::AddProperty => {
            if !form.add_property() {
                tracing::debug!("property limit reached");
            }
            form.recheck_filled();
        }
        FormAction::RemoveProperty(index) => {
            if !form.remove_property(index) {
                tracing::debug!(index, "property not removed");
            }
            form.recheck_filled();
        }
        FormAction::Submit => {
            form.submit(app.submitter.as_ref());
        }
    }

    if htmx {
        html_response(signup_form(&form))
    } else {
        html_response(signup_page(&form, app.maps_api_key.as_deref()))
    }
}

/// `POST /signup/validate?field=..&index=..`: re-check one field on blur and
/// return only its error slot.
pub fn post_validate(mut req: Request) -> ResultResp {
    let field = req
        .uri()
        .query()
        .and_then(parse_field_query)
        .ok_or_else(|| ServerError::BadRequest("unknown field".into()))?;

    let posted = parse_signup_body(&read_body(&mut req)?);
    if let FieldId::Property(index, _) = field {
        if index >= posted.draft.properties.len() {
            return Err(ServerError::BadRequest(format!("no property at index {index}")));
        }
    }

    let mut form = SignupForm::from_draft(posted.draft);
    form.blur(field);
    html_response(field_error(field, form.errors.get(field)))
}
