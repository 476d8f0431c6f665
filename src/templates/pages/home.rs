// templates/pages/home.rs

use crate::templates::{
    components::{card, check_list, cta_link},
    desktop_layout,
};
use maud::{html, Markup};

/// Last day of the incentive window, shown as plain text.
pub const OFFER_DEADLINE: &str = "February 13th";

pub fn home_page() -> Markup {
    desktop_layout(
        "Free EV Chargers For Your Property",
        html! {
            section class="hero" {
                div class="container split" {
                    div {
                        span class="badge" { "Limited Time Offer" }
                        h1 { "Free EV Chargers For Your Property" }
                        p class="lead" {
                            "Perfect for properties with 10+ units. Get EV chargers installed at no cost!"
                        }
                        p {
                            "Transform your property with zero-cost EV charging infrastructure. "
                            "Attract eco-conscious tenants and create a new revenue stream while supporting sustainability."
                        }
                        div class="actions" {
                            (cta_link("/signup", "Talk to an Expert"))
                            a href="/about" class="btn-secondary" { "Learn More" }
                        }
                    }
                    div class="hero-badge" {
                        span class="big" { "FREE" }
                        span { "Installation" }
                    }
                }
            }

            section class="container offer" {
                h2 { "Limited Time Opportunity" }
                p {
                    "Take advantage of our no-cost installation program while LADWP rebates and "
                    "Federal tax credits are at their peak. Offer ends " (OFFER_DEADLINE) "."
                }
                div class="callout" {
                    h4 { "Double Benefits" }
                    (check_list(&[
                        "Free professional installation covered by LADWP rebates",
                        "Ongoing revenue from EV charging fees",
                        "Federal tax credits at peak rate of 30%",
                    ]))
                }
            }

            section class="container split" {
                div {
                    h2 { "Premium EV Charging Infrastructure" }
                    p {
                        "Our sleek, modern charging stations are designed for reliability and ease of use. "
                        "With smart features and durable construction, they're perfect for any multi-dwelling "
                        "property with 10 or more units."
                    }
                    (check_list(&[
                        "High-speed charging capabilities",
                        "Smart load management",
                        "Weather-resistant design",
                    ]))
                }
                div {
                    h2 { "Smart Management System" }
                    p {
                        "Monitor and manage your charging infrastructure with our intuitive dashboard. "
                        "Track usage, analyze patterns, and optimize performance in real-time."
                    }
                }
            }

            section class="container" {
                h2 class="center" { "Uplift your Property Value" }
                p class="center" { "with a simple Centralized Solution" }
                div class="grid-4" {
                    (card("Attract eco-conscious tenants", html! {
                        p { "Offering at-home EV charging enhances tenant satisfaction and attracts eco-conscious renters." }
                    }))
                    (card("Centralized platform", html! {
                        p { "Centralized management for a holistic view of operations, maintenance, and resident satisfaction." }
                    }))
                    (card("Automatic payments & Invoicing", html! {
                        p { "Automated, secure payments to enhance transparency and satisfaction for EV charging management." }
                    }))
                    (card("Seamless User experience", html! {
                        p { "Track, optimize, and stay informed for a seamless charging experience." }
                    }))
                }
            }

            section class="container cta center" {
                h2 { "Ready to super-charge your property?" }
                p {
                    "Perfect for properties with 10+ units. Don't miss out on this limited time offer, ending "
                    (OFFER_DEADLINE) "!"
                }
                (cta_link("/signup", "Talk to an Expert"))
            }
        },
    )
}
