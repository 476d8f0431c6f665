// src/domain/draft.rs

use crate::domain::lead::{Lead, Property};
use crate::domain::validation::{self, FieldError};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw, unvalidated lead as typed into the form or posted to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub owner_company: String,
    pub email: String,
    pub phone: String,
    pub consent: bool,
    pub properties: Vec<PropertyDraft>,
}

impl Default for LeadDraft {
    /// The initial form state: empty owner fields and a single empty property.
    fn default() -> Self {
        Self {
            owner_company: String::new(),
            email: String::new(),
            phone: String::new(),
            consent: false,
            properties: vec![PropertyDraft::default()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDraft {
    #[serde(deserialize_with = "loose_string")]
    pub street_address: String,
    #[serde(deserialize_with = "loose_string")]
    pub city: String,
    #[serde(deserialize_with = "loose_string")]
    pub state: String,
    #[serde(deserialize_with = "loose_string")]
    pub zip_code: String,
    #[serde(deserialize_with = "loose_string")]
    pub property_type: String,
    #[serde(deserialize_with = "loose_string")]
    pub number_of_units: String,
    #[serde(deserialize_with = "loose_string")]
    pub assigned_parking_spaces: String,
    #[serde(deserialize_with = "loose_string")]
    pub guest_parking_spaces: String,
    #[serde(deserialize_with = "loose_string")]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    OwnerCompany,
    Email,
    Phone,
    Consent,
}

impl OwnerField {
    pub const ALL: [OwnerField; 4] = [
        OwnerField::OwnerCompany,
        OwnerField::Email,
        OwnerField::Phone,
        OwnerField::Consent,
    ];

    /// Name of the form input.
    pub fn name(self) -> &'static str {
        match self {
            OwnerField::OwnerCompany => "owner_company",
            OwnerField::Email => "email",
            OwnerField::Phone => "phone",
            OwnerField::Consent => "consent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    StreetAddress,
    City,
    State,
    ZipCode,
    PropertyType,
    NumberOfUnits,
    AssignedParkingSpaces,
    GuestParkingSpaces,
    Notes,
}

impl PropertyField {
    pub const ALL: [PropertyField; 9] = [
        PropertyField::StreetAddress,
        PropertyField::City,
        PropertyField::State,
        PropertyField::ZipCode,
        PropertyField::PropertyType,
        PropertyField::NumberOfUnits,
        PropertyField::AssignedParkingSpaces,
        PropertyField::GuestParkingSpaces,
        PropertyField::Notes,
    ];

    /// Name of the form input. Every property block repeats these names;
    /// position in the posted body gives the property index.
    pub fn name(self) -> &'static str {
        match self {
            PropertyField::StreetAddress => "street_address",
            PropertyField::City => "city",
            PropertyField::State => "state",
            PropertyField::ZipCode => "zip_code",
            PropertyField::PropertyType => "property_type",
            PropertyField::NumberOfUnits => "number_of_units",
            PropertyField::AssignedParkingSpaces => "assigned_parking_spaces",
            PropertyField::GuestParkingSpaces => "guest_parking_spaces",
            PropertyField::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Addresses a single input on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Owner(OwnerField),
    Property(usize, PropertyField),
}

impl FieldId {
    /// Resolve a field from its input name plus the property index
    /// (ignored for owner fields).
    pub fn from_name(name: &str, index: usize) -> Option<Self> {
        if let Some(f) = OwnerField::from_name(name) {
            return Some(FieldId::Owner(f));
        }
        PropertyField::from_name(name).map(|f| FieldId::Property(index, f))
    }

    /// Stable DOM id for the inline error element.
    pub fn error_dom_id(self) -> String {
        match self {
            FieldId::Owner(f) => format!("err-{}", f.name()),
            FieldId::Property(i, f) => format!("err-{}-{}", f.name(), i),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_company: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<FieldError>,
}

impl OwnerErrors {
    fn slot(&mut self, field: OwnerField) -> &mut Option<FieldError> {
        match field {
            OwnerField::OwnerCompany => &mut self.owner_company,
            OwnerField::Email => &mut self.email,
            OwnerField::Phone => &mut self.phone,
            OwnerField::Consent => &mut self.consent,
        }
    }

    fn get(&self, field: OwnerField) -> Option<&FieldError> {
        match field {
            OwnerField::OwnerCompany => self.owner_company.as_ref(),
            OwnerField::Email => self.email.as_ref(),
            OwnerField::Phone => self.phone.as_ref(),
            OwnerField::Consent => self.consent.as_ref(),
        }
    }

    fn is_empty(&self) -> bool {
        OwnerField::ALL.into_iter().all(|f| self.get(f).is_none())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_units: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_parking_spaces: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_parking_spaces: Option<FieldError>,
}

impl PropertyErrors {
    /// `None` for fields with no rule (notes).
    fn slot(&mut self, field: PropertyField) -> Option<&mut Option<FieldError>> {
        Some(match field {
            PropertyField::StreetAddress => &mut self.street_address,
            PropertyField::City => &mut self.city,
            PropertyField::State => &mut self.state,
            PropertyField::ZipCode => &mut self.zip_code,
            PropertyField::PropertyType => &mut self.property_type,
            PropertyField::NumberOfUnits => &mut self.number_of_units,
            PropertyField::AssignedParkingSpaces => &mut self.assigned_parking_spaces,
            PropertyField::GuestParkingSpaces => &mut self.guest_parking_spaces,
            PropertyField::Notes => return None,
        })
    }

    fn get(&self, field: PropertyField) -> Option<&FieldError> {
        match field {
            PropertyField::StreetAddress => self.street_address.as_ref(),
            PropertyField::City => self.city.as_ref(),
            PropertyField::State => self.state.as_ref(),
            PropertyField::ZipCode => self.zip_code.as_ref(),
            PropertyField::PropertyType => self.property_type.as_ref(),
            PropertyField::NumberOfUnits => self.number_of_units.as_ref(),
            PropertyField::AssignedParkingSpaces => self.assigned_parking_spaces.as_ref(),
            PropertyField::GuestParkingSpaces => self.guest_parking_spaces.as_ref(),
            PropertyField::Notes => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        PropertyField::ALL.into_iter().all(|f| self.get(f).is_none())
    }
}

/// Every validation failure of a draft, keyed by typed field position
/// rather than by built-up strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadErrors {
    #[serde(flatten)]
    pub owner: OwnerErrors,
    /// One entry per property in the draft, same order.
    pub properties: Vec<PropertyErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_properties: Option<FieldError>,
}

impl LeadErrors {
    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        match field {
            FieldId::Owner(f) => self.owner.get(f),
            FieldId::Property(i, f) => self.properties.get(i).and_then(|p| p.get(f)),
        }
    }

    /// Replace the error entry for one field, growing the property list
    /// if needed. All other entries are left as they are.
    pub fn set(&mut self, field: FieldId, error: Option<FieldError>) {
        match field {
            FieldId::Owner(f) => *self.owner.slot(f) = error,
            FieldId::Property(i, f) => {
                if self.properties.len() <= i {
                    self.properties.resize_with(i + 1, PropertyErrors::default);
                }
                if let Some(slot) = self.properties[i].slot(f) {
                    *slot = error;
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_empty()
            && self.no_properties.is_none()
            && self.properties.iter().all(PropertyErrors::is_empty)
    }

    /// Number of fields currently in error.
    pub fn count(&self) -> usize {
        let owner = OwnerField::ALL
            .into_iter()
            .filter(|f| self.owner.get(*f).is_some())
            .count();
        let props: usize = self
            .properties
            .iter()
            .map(|p| {
                PropertyField::ALL
                    .into_iter()
                    .filter(|f| p.get(*f).is_some())
                    .count()
            })
            .sum();
        owner + props + usize::from(self.no_properties.is_some())
    }
}

impl PropertyDraft {
    /// Run the rule for a single field.
    pub fn check(&self, field: PropertyField) -> Option<FieldError> {
        match field {
            PropertyField::StreetAddress => validation::required(&self.street_address).err(),
            PropertyField::City => validation::required(&self.city).err(),
            PropertyField::State => validation::required(&self.state).err(),
            PropertyField::ZipCode => validation::zip_code(&self.zip_code).err(),
            PropertyField::PropertyType => validation::property_type(&self.property_type).err(),
            PropertyField::NumberOfUnits => validation::count(&self.number_of_units, 1).err(),
            PropertyField::AssignedParkingSpaces => {
                validation::count(&self.assigned_parking_spaces, 0).err()
            }
            PropertyField::GuestParkingSpaces => {
                validation::count(&self.guest_parking_spaces, 0).err()
            }
            PropertyField::Notes => None,
        }
    }

    pub fn value(&self, field: PropertyField) -> &str {
        match field {
            PropertyField::StreetAddress => &self.street_address,
            PropertyField::City => &self.city,
            PropertyField::State => &self.state,
            PropertyField::ZipCode => &self.zip_code,
            PropertyField::PropertyType => &self.property_type,
            PropertyField::NumberOfUnits => &self.number_of_units,
            PropertyField::AssignedParkingSpaces => &self.assigned_parking_spaces,
            PropertyField::GuestParkingSpaces => &self.guest_parking_spaces,
            PropertyField::Notes => &self.notes,
        }
    }

    pub fn value_mut(&mut self, field: PropertyField) -> &mut String {
        match field {
            PropertyField::StreetAddress => &mut self.street_address,
            PropertyField::City => &mut self.city,
            PropertyField::State => &mut self.state,
            PropertyField::ZipCode => &mut self.zip_code,
            PropertyField::PropertyType => &mut self.property_type,
            PropertyField::NumberOfUnits => &mut self.number_of_units,
            PropertyField::AssignedParkingSpaces => &mut self.assigned_parking_spaces,
            PropertyField::GuestParkingSpaces => &mut self.guest_parking_spaces,
            PropertyField::Notes => &mut self.notes,
        }
    }

    pub fn validate(&self) -> Result<Property, PropertyErrors> {
        let street_address = validation::required(&self.street_address);
        let city = validation::required(&self.city);
        let state = validation::required(&self.state);
        let zip_code = validation::zip_code(&self.zip_code);
        let property_type = validation::property_type(&self.property_type);
        let number_of_units = validation::count(&self.number_of_units, 1);
        let assigned = validation::count(&self.assigned_parking_spaces, 0);
        let guest = validation::count(&self.guest_parking_spaces, 0);

        match (
            street_address,
            city,
            state,
            zip_code,
            property_type,
            number_of_units,
            assigned,
            guest,
        ) {
            (
                Ok(street_address),
                Ok(city),
                Ok(state),
                Ok(zip_code),
                Ok(property_type),
                Ok(number_of_units),
                Ok(assigned_parking_spaces),
                Ok(guest_parking_spaces),
            ) => Ok(Property {
                street_address,
                city,
                state,
                zip_code,
                property_type,
                number_of_units,
                assigned_parking_spaces,
                guest_parking_spaces,
                notes: validation::optional(&self.notes),
            }),
            (a, b, c, d, e, f, g, h) => Err(PropertyErrors {
                street_address: a.err(),
                city: b.err(),
                state: c.err(),
                zip_code: d.err(),
                property_type: e.err(),
                number_of_units: f.err(),
                assigned_parking_spaces: g.err(),
                guest_parking_spaces: h.err(),
            }),
        }
    }
}

impl LeadDraft {
    pub fn check(&self, field: FieldId) -> Option<FieldError> {
        match field {
            FieldId::Owner(OwnerField::OwnerCompany) => {
                validation::required(&self.owner_company).err()
            }
            FieldId::Owner(OwnerField::Email) => validation::email(&self.email).err(),
            FieldId::Owner(OwnerField::Phone) => validation::phone(&self.phone).err(),
            FieldId::Owner(OwnerField::Consent) => validation::consent(self.consent).err(),
            FieldId::Property(i, f) => self.properties.get(i).and_then(|p| p.check(f)),
        }
    }

    /// Validate everything, producing either a typed [`Lead`] or the full
    /// set of field errors.
    pub fn validate(&self) -> Result<Lead, LeadErrors> {
        let owner_company = validation::required(&self.owner_company);
        let email = validation::email(&self.email);
        let phone = validation::phone(&self.phone);
        let consent = validation::consent(self.consent);

        let mut properties = Vec::with_capacity(self.properties.len());
        let mut property_errors = Vec::with_capacity(self.properties.len());
        for draft in &self.properties {
            match draft.validate() {
                Ok(p) => {
                    properties.push(p);
                    property_errors.push(PropertyErrors::default());
                }
                Err(e) => property_errors.push(e),
            }
        }

        let no_properties = self
            .properties
            .is_empty()
            .then_some(FieldError::NoProperties);

        match (owner_company, email, phone, consent) {
            (Ok(owner_company), Ok(email), Ok(phone), Ok(consent))
                if no_properties.is_none() && properties.len() == self.properties.len() =>
            {
                Ok(Lead {
                    owner_company,
                    email,
                    phone,
                    consent,
                    properties,
                })
            }
            (a, b, c, d) => Err(LeadErrors {
                owner: OwnerErrors {
                    owner_company: a.err(),
                    email: b.err(),
                    phone: c.err(),
                    consent: d.err(),
                },
                properties: property_errors,
                no_properties,
            }),
        }
    }
}

/// Wire shape accepted by the submit endpoint. Either a `properties` array
/// or, in the older single-property shape, property fields at top level.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLead {
    #[serde(default, deserialize_with = "loose_string")]
    owner_company: String,
    #[serde(default, deserialize_with = "loose_string")]
    email: String,
    #[serde(default, deserialize_with = "loose_string")]
    phone: String,
    #[serde(default, deserialize_with = "loose_bool")]
    consent: bool,
    #[serde(default)]
    properties: Option<Vec<PropertyDraft>>,
    #[serde(flatten)]
    single: PropertyDraft,
}

impl<'de> Deserialize<'de> for LeadDraft {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let wire = WireLead::deserialize(d)?;
        Ok(LeadDraft {
            owner_company: wire.owner_company,
            email: wire.email,
            phone: wire.phone,
            consent: wire.consent,
            properties: wire.properties.unwrap_or_else(|| vec![wire.single]),
        })
    }
}

impl From<&Lead> for LeadDraft {
    fn from(lead: &Lead) -> Self {
        LeadDraft {
            owner_company: lead.owner_company.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            consent: lead.consent,
            properties: lead
                .properties
                .iter()
                .map(|p| PropertyDraft {
                    street_address: p.street_address.clone(),
                    city: p.city.clone(),
                    state: p.state.clone(),
                    zip_code: p.zip_code.clone(),
                    property_type: p.property_type.label().to_string(),
                    number_of_units: p.number_of_units.to_string(),
                    assigned_parking_spaces: p.assigned_parking_spaces.to_string(),
                    guest_parking_spaces: p.guest_parking_spaces.to_string(),
                    notes: p.notes.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Browsers post numbers as strings and API callers post them as numbers;
/// keep whatever arrived as text and let validation decide.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn loose_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(d)? {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(n)) => n.to_string(),
        Some(Loose::Bool(b)) => b.to_string(),
    })
}

fn loose_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Option::<Loose>::deserialize(d)? {
        Some(Loose::Bool(b)) => b,
        Some(Loose::Text(s)) => matches!(s.trim(), "true" | "on" | "yes" | "Yes" | "1"),
        Some(Loose::Int(n)) => n == 1,
        Some(Loose::Float(_)) | None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::PropertyType;
    use serde_json::json;

    fn valid_property() -> PropertyDraft {
        PropertyDraft {
            street_address: "123 Main St".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip_code: "90001".into(),
            property_type: "Apartment Building".into(),
            number_of_units: "24".into(),
            assigned_parking_spaces: "30".into(),
            guest_parking_spaces: "0".into(),
            notes: String::new(),
        }
    }

    fn valid_draft() -> LeadDraft {
        LeadDraft {
            owner_company: "Acme Holdings".into(),
            email: "a@b.com".into(),
            phone: "555-123-4567".into(),
            consent: true,
            properties: vec![valid_property()],
        }
    }

    #[test]
    fn valid_draft_becomes_lead() {
        let lead = valid_draft().validate().expect("valid");
        assert_eq!(lead.phone, "5551234567");
        assert_eq!(lead.properties.len(), 1);
        assert_eq!(lead.properties[0].property_type, PropertyType::ApartmentBuilding);
        assert_eq!(lead.properties[0].number_of_units, 24);
        assert_eq!(lead.properties[0].notes, None);
    }

    #[test]
    fn errors_are_indexed_per_property() {
        let mut draft = valid_draft();
        let mut bad = valid_property();
        bad.zip_code = "ABCDE".into();
        bad.number_of_units = "0".into();
        draft.properties.push(bad);

        let errs = draft.validate().unwrap_err();
        assert!(errs.properties[0].is_empty());
        assert_eq!(errs.properties[1].zip_code, Some(FieldError::InvalidZip));
        assert_eq!(errs.properties[1].number_of_units, Some(FieldError::TooSmall(1)));
        assert_eq!(
            errs.get(FieldId::Property(1, PropertyField::ZipCode)),
            Some(&FieldError::InvalidZip)
        );
        assert_eq!(errs.count(), 2);
    }

    #[test]
    fn consent_false_is_an_error() {
        let mut draft = valid_draft();
        draft.consent = false;
        let errs = draft.validate().unwrap_err();
        assert_eq!(errs.owner.consent, Some(FieldError::ConsentRequired));
    }

    #[test]
    fn empty_property_list_is_rejected() {
        let mut draft = valid_draft();
        draft.properties.clear();
        let errs = draft.validate().unwrap_err();
        assert_eq!(errs.no_properties, Some(FieldError::NoProperties));
    }

    #[test]
    fn set_only_touches_one_entry() {
        let mut errs = LeadErrors::default();
        errs.set(FieldId::Owner(OwnerField::Email), Some(FieldError::InvalidEmail));
        errs.set(
            FieldId::Property(2, PropertyField::City),
            Some(FieldError::Required),
        );
        assert_eq!(errs.properties.len(), 3);

        errs.set(FieldId::Owner(OwnerField::Email), None);
        assert_eq!(errs.owner.email, None);
        assert_eq!(errs.properties[2].city, Some(FieldError::Required));
    }

    #[test]
    fn field_ids_resolve_from_input_names() {
        assert_eq!(
            FieldId::from_name("email", 3),
            Some(FieldId::Owner(OwnerField::Email))
        );
        assert_eq!(
            FieldId::from_name("zip_code", 1),
            Some(FieldId::Property(1, PropertyField::ZipCode))
        );
        assert_eq!(FieldId::from_name("nope", 0), None);
        assert_eq!(
            FieldId::Property(1, PropertyField::ZipCode).error_dom_id(),
            "err-zip_code-1"
        );
    }

    #[test]
    fn deserializes_multi_property_payload_with_numbers() {
        let draft: LeadDraft = serde_json::from_value(json!({
            "ownerCompany": "Acme",
            "email": "a@b.com",
            "phone": "5551234567",
            "consent": true,
            "properties": [
                { "streetAddress": "1 A St", "city": "LA", "state": "CA", "zipCode": "90001",
                  "propertyType": "Other", "numberOfUnits": 12,
                  "assignedParkingSpaces": 4, "guestParkingSpaces": 2 },
                { "streetAddress": "2 B St", "city": "LA", "state": "CA", "zipCode": "90002",
                  "propertyType": "Condo Complex", "numberOfUnits": "8",
                  "assignedParkingSpaces": "8", "guestParkingSpaces": "0", "notes": null }
            ]
        }))
        .unwrap();

        assert_eq!(draft.properties.len(), 2);
        assert_eq!(draft.properties[0].number_of_units, "12");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn deserializes_single_property_payload() {
        let draft: LeadDraft = serde_json::from_value(json!({
            "ownerCompany": "Acme",
            "email": "a@b.com",
            "phone": "555-123-4567",
            "consent": "on",
            "streetAddress": "1 A St", "city": "LA", "state": "CA", "zipCode": "90001-1234",
            "propertyType": "Office Building", "numberOfUnits": 3,
            "assignedParkingSpaces": 0, "guestParkingSpaces": 1,
            "notes": "gated lot"
        }))
        .unwrap();

        assert!(draft.consent);
        assert_eq!(draft.properties.len(), 1);
        let lead = draft.validate().unwrap();
        assert_eq!(lead.properties[0].notes.as_deref(), Some("gated lot"));
    }

    #[test]
    fn draft_round_trips_from_lead() {
        let lead = valid_draft().validate().unwrap();
        let back = LeadDraft::from(&lead);
        assert_eq!(back.validate().unwrap(), lead);
    }
}
