//! Route layouts
//!
//! [`AuthLayout`] hosts the sign-in and sign-up forms and sends signed-in
//! users home. [`RootLayout`] guards the pages behind a session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::core::appwrite::storage;
use crate::ui::auth::use_auth_context;

pub const SIGN_IN_PATH: &str = "/sign-in";

/// Two-column layout for the auth forms
#[component]
pub fn AuthLayout(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <Show
            when=move || !auth.is_authenticated.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <section class="flex flex-1 justify-center items-center flex-col py-10">
                {children()}
            </section>
            <img
                src="/assets/images/side-img.svg"
                alt="logo"
                class="hidden xl:block h-screen w-1/2 object-cover bg-no-repeat"
            />
        </Show>
    }
}

/// Layout for pages that need a session
///
/// Without a stored session marker the user is sent to the sign-in page;
/// otherwise the current user is loaded once on mount.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let marker = storage::load_cookie_fallback();
        if !storage::is_session_marker(marker.as_deref()) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
            return;
        }
        spawn_local(async move {
            auth.check_auth_user().await;
        });
    });

    view! {
        <div class="w-full md:flex">
            <section class="flex flex-1 h-full">{children()}</section>
        </div>
    }
}
