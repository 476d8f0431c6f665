use crate::templates::{components::cta_link, desktop_layout};
use maud::{html, Markup};

pub const CONTACT_EMAIL: &str = "info@dynachrg.com";

const OFFICE_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

pub fn contact_page() -> Markup {
    desktop_layout(
        "Contact",
        html! {
            section class="container" {
                h1 class="center" { "Get in Touch with Dynachrg" }
                p class="center lead" {
                    "Have questions about our EV charger installation program? We're here to help. "
                    "Reach out to us directly or start your application online."
                }

                div class="split" {
                    div class="card" {
                        h2 { "Contact Information" }
                        dl class="contact-list" {
                            dt { "Email" }
                            dd { a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) } }
                            dt { "Phone" }
                            dd { a href="tel:+15551234567" { "(555) 123-4567" } }
                            dt { "Location" }
                            dd { "Los Angeles, CA" }
                        }
                    }

                    div class="card" {
                        h2 { "Office Hours" }
                        table class="hours" {
                            @for (days, hours) in OFFICE_HOURS {
                                tr {
                                    td { (days) }
                                    td { strong { (hours) } }
                                }
                            }
                        }
                        h3 { "Quick Response Guarantee" }
                        p { "We aim to respond to all inquiries within 24 hours during business hours." }
                    }
                }

                (message_form())

                div class="center" {
                    (cta_link("/signup", "Qualify Your Property"))
                }
            }
        },
    )
}

/// Hands the message to the visitor's mail client; nothing is stored here.
fn message_form() -> Markup {
    html! {
        form class="card form" method="post" enctype="text/plain"
            action={ "mailto:" (CONTACT_EMAIL) "?subject=Website%20inquiry" }
        {
            h2 { "Send Us a Message" }
            div class="field" {
                label for="contact-name" { "Name" }
                input type="text" id="contact-name" name="name" required;
            }
            div class="field" {
                label for="contact-email" { "Email" }
                input type="email" id="contact-email" name="email" required;
            }
            div class="field" {
                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" rows="5" required {}
            }
            button type="submit" class="btn-primary wide" { "Send Message" }
        }
    }
}
