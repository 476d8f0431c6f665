pub mod draft;
pub mod lead;
pub mod validation;

pub use draft::{FieldId, LeadDraft, LeadErrors, OwnerField, PropertyDraft, PropertyField};
pub use lead::{Lead, PropertyType};
pub use validation::FieldError;
