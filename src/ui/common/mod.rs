//! Common reusable UI components
//!
//! Shared building blocks for the auth forms and layouts.

pub mod button;
pub mod form;
pub mod spinner;

pub use button::SubmitButton;
pub use form::{FormField, clear_on_edit, field_error};
pub use spinner::{Loader, Spinner, SpinnerSize};
