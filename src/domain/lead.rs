// src/domain/lead.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated lead: one owner, one or more properties.
///
/// Only ever built through [`crate::domain::LeadDraft::validate`], so every
/// field here already satisfies the validation rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub owner_company: String,
    pub email: String,
    /// Always exactly 10 digits.
    pub phone: String,
    pub consent: bool,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub number_of_units: u32,
    pub assigned_parking_spaces: u32,
    pub guest_parking_spaces: u32,
    pub notes: Option<String>,
}

impl Property {
    /// "123 Main St, Los Angeles, CA 90001"
    pub fn combined_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street_address, self.city, self.state, self.zip_code
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Apartment Building")]
    ApartmentBuilding,
    #[serde(rename = "Condo Complex")]
    CondoComplex,
    #[serde(rename = "Mixed-Use Development")]
    MixedUseDevelopment,
    #[serde(rename = "Office Building")]
    OfficeBuilding,
    #[serde(rename = "Parking Structure")]
    ParkingStructure,
    #[serde(rename = "Other")]
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::ApartmentBuilding,
        PropertyType::CondoComplex,
        PropertyType::MixedUseDevelopment,
        PropertyType::OfficeBuilding,
        PropertyType::ParkingStructure,
        PropertyType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::ApartmentBuilding => "Apartment Building",
            PropertyType::CondoComplex => "Condo Complex",
            PropertyType::MixedUseDevelopment => "Mixed-Use Development",
            PropertyType::OfficeBuilding => "Office Building",
            PropertyType::ParkingStructure => "Parking Structure",
            PropertyType::Other => "Other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or(())
    }
}
