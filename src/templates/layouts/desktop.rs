use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Dynachrg";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    desktop_layout_with_scripts(title, content, html! {})
}

/// Same shell, with extra markup appended to the end of `body`.
pub fn desktop_layout_with_scripts(title: &str, content: Markup, scripts: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Sign up for free EV charger installation with Dynachrg. Earn $500 per property.";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    nav class="container nav" {
                        a href="/" class="brand" { (SITE_NAME) }
                        ul class="nav-links" {
                            li { a href="/" { "Home" } }
                            li { a href="/about" { "About" } }
                            li { a href="/faq" { "FAQ" } }
                            li { a href="/contact" { "Contact" } }
                        }
                        a href="/signup" class="btn-primary" { "Qualify Now" }
                    }
                }

                main { (content) }

                (footer())
                (scripts)
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                div {
                    h3 { (SITE_NAME) }
                    p { "Accelerating EV adoption through hassle-free charger installations." }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/about" { "About" } }
                        li { a href="/faq" { "FAQ" } }
                        li { a href="/contact" { "Contact" } }
                    }
                }
                div {
                    h3 { "Contact" }
                    ul {
                        li { "Email: info@dynachrg.com" }
                        li { "Phone: (555) 123-4567" }
                        li { "Los Angeles, CA" }
                    }
                }
            }
            p class="container copyright" {
                "© " (chrono::Utc::now().format("%Y").to_string()) " " (SITE_NAME) ". All rights reserved."
            }
        }
    }
}
