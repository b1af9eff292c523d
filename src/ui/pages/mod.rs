//! Application pages module
//!
//! - Home page (signed-in users)
//! - Sign-in and sign-up pages, wrapping the auth forms
//! - Not found page

mod home;
mod not_found;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::{SignInForm, SignUpForm};

pub use home::HomePage;
pub use not_found::NotFoundPage;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <Title text="Log in | Snapgram" />
        <SignInForm />
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <Title text="Sign up | Snapgram" />
        <SignUpForm />
    }
}
