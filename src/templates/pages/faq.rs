use crate::templates::{components::cta_link, desktop_layout};
use maud::{html, Markup};

pub const FAQS: &[(&str, &str)] = &[
    (
        "What is the $500 incentive?",
        "We are offering $500 per property that signs up for EV charger installation by January 12th. Payment is made after contract approval and signature.",
    ),
    (
        "How does the free installation work?",
        "Our program utilizes LADWP rebates and government incentives to cover installation and equipment costs.",
    ),
    (
        "What properties qualify?",
        "Apartment buildings, office spaces, parking lots, and shopping centers with sufficient power supply.",
    ),
    (
        "How long does the approval process take?",
        "Typically 48-72 hours for initial qualification and up to 90 days for city approval.",
    ),
    (
        "Are there any upfront costs?",
        "No, there are no upfront costs. All installation and equipment costs are covered through LADWP rebates and government incentives.",
    ),
    (
        "How do I generate revenue from the chargers?",
        "Property owners earn a percentage of the charging fees collected from EV users. The exact revenue share will be outlined in your contract.",
    ),
    (
        "What maintenance is required?",
        "We handle all maintenance and servicing of the chargers. Property owners are not responsible for any maintenance costs.",
    ),
    (
        "Can I choose the location of the chargers?",
        "Yes, we work with property owners to determine the optimal locations for charger installation, considering factors like accessibility and electrical infrastructure.",
    ),
];

pub fn faq_page() -> Markup {
    desktop_layout(
        "FAQ",
        html! {
            section class="container narrow" {
                h1 class="center" { "Frequently Asked Questions" }
                p class="center lead" {
                    "Find answers to common questions about our EV charger installation program."
                }

                div class="faq-list" {
                    @for (question, answer) in FAQS {
                        details class="faq" {
                            summary { (question) }
                            p { (answer) }
                        }
                    }
                }

                div class="center" {
                    p { "Still have questions?" }
                    (cta_link("/contact", "Contact Us"))
                }
            }
        },
    )
}
