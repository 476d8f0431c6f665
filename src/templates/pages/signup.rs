// templates/pages/signup.rs

use crate::domain::{FieldId, OwnerField, PropertyDraft, PropertyField};
use crate::signup::{FormStatus, SignupForm, MAX_PROPERTIES};
use crate::templates::components::fields::{
    consent_checkbox, input_field, notes_field, property_type_select, state_select, InputSpec,
};
use crate::templates::layouts::desktop::desktop_layout_with_scripts;
use maud::{html, Markup, PreEscaped};

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your application was received. Our team will review it within 48-72 hours.";

pub fn signup_page(form: &SignupForm, maps_api_key: Option<&str>) -> Markup {
    desktop_layout_with_scripts(
        "Qualify Your Property",
        html! {
            section class="container narrow" {
                h1 class="center" { "Qualify Your Property for EV Charger Installation" }
                p class="center lead" {
                    "Fill out the form below and our team will review your application within 48-72 hours."
                }
                (signup_form(form))
            }
        },
        maps_api_key
            .map(address_autocomplete)
            .unwrap_or_else(|| html! {}),
    )
}

/// The form alone; htmx swaps this in place after each post.
pub fn signup_form(form: &SignupForm) -> Markup {
    let values = &form.values;
    let errors = &form.errors;
    let owner = |f: OwnerField| errors.get(FieldId::Owner(f));
    let can_remove = values.properties.len() > 1;

    html! {
        form id="signup-form" class="card form" method="post" action="/signup"
            hx-post="/signup" hx-target="this" hx-swap="outerHTML"
            hx-disabled-elt="button" hx-disinherit="hx-disabled-elt"
            novalidate
        {
            // Enter submits through the first submit button in tree order.
            button type="submit" name="action" value="submit" class="default-action"
                tabindex="-1" aria-hidden="true" { "Submit" }

            (status_banner(&form.status))

            fieldset {
                legend { "Contact Information" }
                (input_field(InputSpec::text(
                    FieldId::Owner(OwnerField::OwnerCompany),
                    "Owner/Company Name",
                    &values.owner_company,
                    owner(OwnerField::OwnerCompany),
                )))
                (input_field(InputSpec::text(
                    FieldId::Owner(OwnerField::Email),
                    "Email",
                    &values.email,
                    owner(OwnerField::Email),
                ).kind("email")))
                (input_field(InputSpec::text(
                    FieldId::Owner(OwnerField::Phone),
                    "Phone Number",
                    &values.phone,
                    owner(OwnerField::Phone),
                ).kind("tel").placeholder("(555) 123-4567")))
            }

            @for (i, property) in values.properties.iter().enumerate() {
                (property_fieldset(form, i, property, can_remove))
            }

            @if values.properties.len() < MAX_PROPERTIES {
                button type="submit" name="action" value="add_property" class="btn-secondary" formnovalidate {
                    "+ Add another property"
                }
            }

            (consent_checkbox(values.consent, owner(OwnerField::Consent)))

            button type="submit" name="action" value="submit" class="btn-primary wide" {
                "Submit Application →"
            }
        }
    }
}

fn property_fieldset(form: &SignupForm, i: usize, p: &PropertyDraft, can_remove: bool) -> Markup {
    let err = |f: PropertyField| form.errors.get(FieldId::Property(i, f));
    let id = |f: PropertyField| FieldId::Property(i, f);

    html! {
        fieldset class="property" data-property-index=(i) {
            legend { "Property " (i + 1) }

            (input_field(InputSpec::text(
                id(PropertyField::StreetAddress),
                "Street Address",
                &p.street_address,
                err(PropertyField::StreetAddress),
            ).placeholder("123 Main St")))
            div class="row" {
                (input_field(InputSpec::text(id(PropertyField::City), "City", &p.city, err(PropertyField::City))))
                (state_select(i, &p.state, err(PropertyField::State)))
                (input_field(InputSpec::text(
                    id(PropertyField::ZipCode),
                    "ZIP Code",
                    &p.zip_code,
                    err(PropertyField::ZipCode),
                ).placeholder("90001")))
            }
            (property_type_select(i, &p.property_type, err(PropertyField::PropertyType)))
            div class="row" {
                (input_field(InputSpec::text(
                    id(PropertyField::NumberOfUnits),
                    "Number of Units",
                    &p.number_of_units,
                    err(PropertyField::NumberOfUnits),
                ).number(1)))
                (input_field(InputSpec::text(
                    id(PropertyField::AssignedParkingSpaces),
                    "Assigned Parking Spaces",
                    &p.assigned_parking_spaces,
                    err(PropertyField::AssignedParkingSpaces),
                ).number(0)))
                (input_field(InputSpec::text(
                    id(PropertyField::GuestParkingSpaces),
                    "Guest/Visitor Parking Spaces",
                    &p.guest_parking_spaces,
                    err(PropertyField::GuestParkingSpaces),
                ).number(0)))
            }
            (notes_field(i, &p.notes))

            @if can_remove {
                button type="submit" name="action" value={ "remove_property:" (i) }
                    class="btn-link" formnovalidate
                { "Remove this property" }
            }
        }
    }
}

fn status_banner(status: &FormStatus) -> Markup {
    html! {
        @match status {
            FormStatus::Idle => {}
            FormStatus::Submitting => div class="banner info" role="status" { "Submitting…" },
            FormStatus::Success => div class="banner success" role="status" { (SUCCESS_MESSAGE) },
            FormStatus::Error(message) => div class="banner error" role="alert" { (message) },
        }
    }
}

/// Places autocomplete on every street input; fills city, state and zip of
/// the same property block. Rebinds after htmx swaps the form.
fn address_autocomplete(api_key: &str) -> Markup {
    let key: String = url::form_urlencoded::byte_serialize(api_key.as_bytes()).collect();
    html! {
        script {
            (PreEscaped(r#"
function initAddressAutocomplete() {
  document.querySelectorAll('fieldset.property input[name="street_address"]').forEach(function (input) {
    if (input.dataset.autocompleteBound) return;
    input.dataset.autocompleteBound = "1";
    var ac = new google.maps.places.Autocomplete(input, {
      types: ["address"],
      componentRestrictions: { country: "us" },
      fields: ["address_components"]
    });
    ac.addListener("place_changed", function () {
      var place = ac.getPlace();
      if (!place.address_components) return;
      var parts = {};
      place.address_components.forEach(function (c) { parts[c.types[0]] = c; });
      var block = input.closest("fieldset.property");
      var set = function (name, value) {
        var el = block.querySelector('[name="' + name + '"]');
        if (el && value) el.value = value;
      };
      var street = [parts.street_number && parts.street_number.long_name, parts.route && parts.route.long_name]
        .filter(Boolean).join(" ");
      set("street_address", street);
      set("city", parts.locality && parts.locality.long_name);
      set("state", parts.administrative_area_level_1 && parts.administrative_area_level_1.short_name);
      set("zip_code", parts.postal_code && parts.postal_code.long_name);
    });
  });
}
document.addEventListener("htmx:afterSwap", function () {
  if (window.google && google.maps && google.maps.places) initAddressAutocomplete();
});
"#))
        }
        script async defer
            src={ "https://maps.googleapis.com/maps/api/js?key=" (key) "&libraries=places&callback=initAddressAutocomplete" } {}
    }
}
