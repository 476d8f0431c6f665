use maud::{html, Markup};

pub mod error;
pub mod fields;

pub use error::html_error_response;

pub fn cta_link(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) class="btn-primary" { (label) " →" }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Big number with a caption underneath.
pub fn stat(value: &str, label: &str) -> Markup {
    html! {
        div class="stat" {
            div class="stat-value" { (value) }
            p { (label) }
        }
    }
}

pub fn check_list(items: &[&str]) -> Markup {
    html! {
        ul class="check-list" {
            @for item in items {
                li { (item) }
            }
        }
    }
}
