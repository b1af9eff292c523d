//! Authentication UI module
//!
//! Sign-in and sign-up forms, the auth context shared across the app and the
//! submit flows that tie them together.

mod context;
mod queries;
mod sign_in_form;
mod sign_up_form;
pub mod submit;

pub use context::{AuthContext, User, provide_auth_context, use_auth_context};
pub use queries::{AccountMutations, Mutation};
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
pub use submit::{SubmitOutcome, submit_sign_in, submit_sign_up};
