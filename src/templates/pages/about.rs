use crate::templates::{
    components::{card, check_list, cta_link, stat},
    desktop_layout,
};
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "About",
        html! {
            section class="hero" {
                div class="container narrow" {
                    span class="badge" { "Sustainable Future" }
                    h1 { "About Dynachrg" }
                    p class="lead" {
                        "Dynachrg is committed to accelerating the adoption of electric vehicles by providing "
                        "cost-free EV charger installations to property owners, with a $500 bonus for each charger installed."
                    }
                    (cta_link("/signup", "Get Started Today"))
                }
            }

            section class="container grid-4" {
                (stat("2500+", "Chargers Installed"))
                (stat("$2M+", "Revenue Generated"))
                (stat("5000+", "EV Drivers Served"))
                (stat("24/7", "Support Available"))
            }

            section class="container split" {
                div {
                    span class="badge" { "Our Mission" }
                    h2 { "Empowering Property Owners" }
                    p {
                        "At Dynachrg, we believe that the future of transportation is electric. Our mission is to "
                        "make EV charging infrastructure accessible to all by removing the financial barriers that "
                        "property owners face."
                    }
                    p {
                        "Through strategic partnerships with LADWP and government agencies, we provide "
                        "state-of-the-art EV charging solutions at no cost, plus a $500 bonus for each charger "
                        "installed, creating new revenue streams for your business."
                    }
                    (check_list(&[
                        "Zero upfront costs + $500 per charger",
                        "Ongoing revenue share",
                        "Full maintenance support",
                    ]))
                }
                div class="stack" {
                    (card("Sustainable Future", html! { p { "Supporting the transition to clean energy transportation." } }))
                    (card("Property Value", html! { p { "Enhancing properties with modern charging infrastructure." } }))
                    (card("Revenue Growth", html! { p { "Creating new income streams for property owners." } }))
                }
            }

            section class="container" {
                h2 class="center" { "Why Choose Dynachrg?" }
                p class="center" {
                    "Join hundreds of property owners who trust Dynachrg for their EV charging needs"
                }
                div class="grid-3" {
                    (card("Backed by LADWP", html! {
                        p { "Our program is supported by LADWP rebates and government incentives, ensuring a cost-free installation process." }
                    }))
                    (card("Experienced Team", html! {
                        p { "Our team of experts handles everything from site assessment to installation and ongoing maintenance." }
                    }))
                    (card("Proven Results", html! {
                        p { "Join our network of satisfied property owners who are generating revenue while supporting sustainable transportation." }
                    }))
                }
            }

            section class="container cta center" {
                h2 { "Ready to Get Started?" }
                p {
                    "Join our mission to create a more sustainable future while earning $500 for each charger "
                    "installed, plus ongoing monthly revenue from EV charging."
                }
                (cta_link("/signup", "Qualify Your Property"))
            }
        },
    )
}
