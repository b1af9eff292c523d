//! Home page shown to signed-in users

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{User, use_auth_context};
use crate::ui::common::{Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::layouts::SIGN_IN_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            auth.sign_out().await;
            navigate(SIGN_IN_PATH, Default::default());
        });
    };

    view! {
        <Title text="Snapgram" />

        <div class="flex flex-col flex-1 items-center gap-10 py-10 px-5 md:px-8 lg:p-14">
            <div class="flex w-full max-w-5xl justify-between items-center">
                <img src="/assets/images/logo.svg" alt="logo" width=130 height=325 />
                <button type="button" class="shad-button_ghost" on:click=on_sign_out>
                    <Icon name=icons::LOGOUT />
                    <span class="small-medium">"Logout"</span>
                </button>
            </div>

            <Show
                when=move || !auth.is_loading.get()
                fallback=|| view! { <Spinner size=SpinnerSize::Large centered=true /> }
            >
                {move || auth.user.get().map(|user| view! { <ProfileCard user=user /> })}
            </Show>
        </div>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let greeting = format!("Welcome, {}", user.name);
    let handle = format!("@{}", user.username);

    view! {
        <div class="flex flex-col items-center gap-3">
            <img src=user.image_url alt="profile" class="h-24 w-24 rounded-full" />
            <h2 class="h3-bold md:h2-bold">{greeting}</h2>
            <p class="small-regular text-light-3">{handle}</p>
            {(!user.bio.is_empty()).then(|| view! { <p class="base-regular">{user.bio}</p> })}
        </div>
    }
}
