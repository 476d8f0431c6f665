pub mod about;
pub mod contact;
pub mod faq;
pub mod home;
pub mod signup;

pub use about::about_page;
pub use contact::contact_page;
pub use faq::faq_page;
pub use home::home_page;
pub use signup::{signup_form, signup_page};
