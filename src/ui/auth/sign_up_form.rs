//! Sign-up form
//!
//! Creates the account, signs in with the same credentials and checks the
//! session before going home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use super::queries::AccountMutations;
use super::submit::{LeptosFormUi, submit_sign_up};
use crate::core::validation::{FieldErrors, SignUpInput, validate_form};
use crate::ui::common::{FormField, SubmitButton, clear_on_edit, field_error};
use crate::ui::notifications::use_toaster;

/// Submit button text
pub const SUBMIT_LABEL: &str = "Sign Up";

#[component]
pub fn SignUpForm() -> impl IntoView {
    let auth = use_auth_context();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let mutations = AccountMutations::new(auth.client());

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let loading = mutations.busy(auth.is_loading);

    let reset = move || {
        for field in [name, username, email, password] {
            field.set(String::new());
        }
        errors.set(FieldErrors::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = SignUpInput {
            name: name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(field_errors) = validate_form(&input) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let mutations = mutations.clone();
        let ui = LeptosFormUi::new(toaster, navigate.clone(), reset);
        spawn_local(async move {
            submit_sign_up(&mutations, &auth, &ui, &input).await;
        });
    };

    view! {
        <div class="sm:w-420 flex-center flex-col">
            <img src="/assets/images/logo.svg" alt="logo" />

            <h2 class="h3-bold md:h2-bold pt-5 sm:pt-12">"Create a new accounts"</h2>
            <p class="text-light-3 small-medium md:base-regular mt-2">
                "To use the app, please enter the details"
            </p>

            <form on:submit=on_submit class="flex flex-col gap-5 w-full mt-4" novalidate>
                <FormField
                    name="name"
                    label="Name"
                    autocomplete="name"
                    value=name
                    error=field_error(errors, "name")
                    on_edit=clear_on_edit(errors, "name")
                />
                <FormField
                    name="username"
                    label="Username"
                    autocomplete="username"
                    value=username
                    error=field_error(errors, "username")
                    on_edit=clear_on_edit(errors, "username")
                />
                <FormField
                    name="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    error=field_error(errors, "email")
                    on_edit=clear_on_edit(errors, "email")
                />
                <FormField
                    name="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                    error=field_error(errors, "password")
                    on_edit=clear_on_edit(errors, "password")
                />

                <SubmitButton label=SUBMIT_LABEL loading=loading />

                <p class="text-small-regular text-light-2 text-center mt-2">
                    "Already have an account? "
                    <A href="/sign-in" attr:class="text-primary-500 text-small-semibold ml-1">
                        "Log In"
                    </A>
                </p>
            </form>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_submit_button_reads_sign_up() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! { <SubmitButton label=SUBMIT_LABEL loading=Signal::stored(false) /> }.to_html()
        });

        assert!(html.contains("Sign Up"));
    }
}
