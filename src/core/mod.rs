//! Domain logic shared by the server and the browser bundle

pub mod appwrite;
#[cfg(feature = "ssr")]
pub mod config;
pub mod validation;

pub use validation::{Credentials, FieldErrors, SignUpInput, validate_form};
