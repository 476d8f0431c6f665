// src/signup/form_body.rs

use crate::domain::{FieldId, LeadDraft, OwnerField, PropertyDraft, PropertyField};

/// Which button submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    AddProperty,
    RemoveProperty(usize),
}

impl FormAction {
    fn parse(value: &str) -> Self {
        match value {
            "add_property" => FormAction::AddProperty,
            v => v
                .strip_prefix("remove_property:")
                .and_then(|i| i.parse().ok())
                .map(FormAction::RemoveProperty)
                .unwrap_or(FormAction::Submit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostedForm {
    pub draft: LeadDraft,
    pub action: FormAction,
}

/// Decode an urlencoded signup body.
///
/// Property inputs share their names across blocks, so the n-th value of
/// `zip_code` belongs to the n-th property.
pub fn parse_signup_body(body: &[u8]) -> PostedForm {
    let mut draft = LeadDraft {
        properties: Vec::new(),
        ..LeadDraft::default()
    };
    let mut action = FormAction::Submit;
    let mut columns: [Vec<String>; PropertyField::ALL.len()] = Default::default();

    for (key, value) in url::form_urlencoded::parse(body) {
        if key == "action" {
            action = FormAction::parse(&value);
            continue;
        }
        match FieldId::from_name(&key, 0) {
            Some(FieldId::Owner(OwnerField::OwnerCompany)) => draft.owner_company = value.into_owned(),
            Some(FieldId::Owner(OwnerField::Email)) => draft.email = value.into_owned(),
            Some(FieldId::Owner(OwnerField::Phone)) => draft.phone = value.into_owned(),
            Some(FieldId::Owner(OwnerField::Consent)) => {
                draft.consent = matches!(value.as_ref(), "on" | "true" | "yes")
            }
            Some(FieldId::Property(_, field)) => columns[field as usize].push(value.into_owned()),
            None => {}
        }
    }

    let count = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);
    draft.properties = (0..count)
        .map(|i| {
            let mut p = PropertyDraft::default();
            for field in PropertyField::ALL {
                if let Some(v) = columns[field as usize].get(i) {
                    *p.value_mut(field) = v.clone();
                }
            }
            p
        })
        .collect();

    PostedForm { draft, action }
}

/// `field=zip_code&index=1` from the blur request's query string.
pub fn parse_field_query(query: &str) -> Option<FieldId> {
    let mut name = None;
    let mut index = 0usize;
    for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
        match k.as_ref() {
            "field" => name = Some(v.into_owned()),
            "index" => index = v.parse().ok()?,
            _ => {}
        }
    }
    FieldId::from_name(&name?, index)
}
