// Signup form inputs. Each input revalidates itself on blur through
// `/signup/validate` and swaps its own error slot.

use crate::domain::{FieldError, FieldId, OwnerField, PropertyField, PropertyType};
use crate::geos::US_STATES;
use maud::{html, Markup};

fn validate_url(field: FieldId) -> String {
    match field {
        FieldId::Owner(f) => format!("/signup/validate?field={}", f.name()),
        FieldId::Property(i, f) => format!("/signup/validate?field={}&index={}", f.name(), i),
    }
}

fn input_id(field: FieldId) -> String {
    match field {
        FieldId::Owner(f) => f.name().to_string(),
        FieldId::Property(i, f) => format!("{}-{}", f.name(), i),
    }
}

fn input_name(field: FieldId) -> &'static str {
    match field {
        FieldId::Owner(f) => f.name(),
        FieldId::Property(_, f) => f.name(),
    }
}

/// The inline error slot; always rendered so blur swaps have a target.
pub fn field_error(field: FieldId, error: Option<&FieldError>) -> Markup {
    html! {
        span class="field-error" id=(field.error_dom_id()) role="alert" {
            @if let Some(e) = error { (e.to_string()) }
        }
    }
}

pub struct InputSpec<'a> {
    pub field: FieldId,
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a FieldError>,
    pub input_type: &'a str,
    pub placeholder: Option<&'a str>,
    pub min: Option<u32>,
    pub required: bool,
}

impl<'a> InputSpec<'a> {
    pub fn text(field: FieldId, label: &'a str, value: &'a str, error: Option<&'a FieldError>) -> Self {
        Self {
            field,
            label,
            value,
            error,
            input_type: "text",
            placeholder: None,
            min: None,
            required: true,
        }
    }

    pub fn kind(mut self, input_type: &'a str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn number(mut self, min: u32) -> Self {
        self.input_type = "number";
        self.min = Some(min);
        self
    }
}

pub fn input_field(spec: InputSpec<'_>) -> Markup {
    let id = input_id(spec.field);
    html! {
        div.field.has-error[spec.error.is_some()] {
            label for=(id) { (spec.label) }
            input
                type=(spec.input_type)
                id=(id)
                name=(input_name(spec.field))
                value=(spec.value)
                placeholder=[spec.placeholder]
                min=[spec.min]
                required[spec.required]
                hx-post=(validate_url(spec.field))
                hx-trigger="blur"
                hx-include="closest form"
                hx-target={ "#" (spec.field.error_dom_id()) }
                hx-swap="outerHTML";
            (field_error(spec.field, spec.error))
        }
    }
}

pub fn property_type_select(index: usize, value: &str, error: Option<&FieldError>) -> Markup {
    let field = FieldId::Property(index, PropertyField::PropertyType);
    let id = input_id(field);
    html! {
        div.field.has-error[error.is_some()] {
            label for=(id) { "Property Type" }
            select
                id=(id)
                name=(input_name(field))
                required
                hx-post=(validate_url(field))
                hx-trigger="change, blur"
                hx-include="closest form"
                hx-target={ "#" (field.error_dom_id()) }
                hx-swap="outerHTML"
            {
                option value="" { "Select property type" }
                @for t in PropertyType::ALL {
                    option value=(t.label()) selected[t.label() == value] { (t.label()) }
                }
            }
            (field_error(field, error))
        }
    }
}

pub fn state_select(index: usize, value: &str, error: Option<&FieldError>) -> Markup {
    let field = FieldId::Property(index, PropertyField::State);
    let id = input_id(field);
    html! {
        div.field.has-error[error.is_some()] {
            label for=(id) { "State" }
            select
                id=(id)
                name=(input_name(field))
                required
                data-address-part="state"
                hx-post=(validate_url(field))
                hx-trigger="change, blur"
                hx-include="closest form"
                hx-target={ "#" (field.error_dom_id()) }
                hx-swap="outerHTML"
            {
                option value="" { "Select state" }
                @for (abbr, name) in US_STATES {
                    option value=(abbr) selected[*abbr == value] { (name) }
                }
            }
            (field_error(field, error))
        }
    }
}

pub fn notes_field(index: usize, value: &str) -> Markup {
    let field = FieldId::Property(index, PropertyField::Notes);
    let id = input_id(field);
    html! {
        div class="field" {
            label for=(id) { "Additional Notes" }
            textarea
                id=(id)
                name=(input_name(field))
                rows="4"
                placeholder="Any additional information about your property or specific requirements"
            { (value) }
        }
    }
}

pub fn consent_checkbox(checked: bool, error: Option<&FieldError>) -> Markup {
    let field = FieldId::Owner(OwnerField::Consent);
    html! {
        div.field.consent.has-error[error.is_some()] {
            input
                type="checkbox"
                id=(input_id(field))
                name=(input_name(field))
                checked[checked]
                required
                hx-post=(validate_url(field))
                hx-trigger="change"
                hx-include="closest form"
                hx-target={ "#" (field.error_dom_id()) }
                hx-swap="outerHTML";
            label for=(input_id(field)) {
                "I agree to the terms and conditions and understand the incentive payment will be issued after contract approval and signature."
            }
            (field_error(field, error))
        }
    }
}
