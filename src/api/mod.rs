pub mod submit;

pub use submit::post_submit;
