use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{HomePage, NotFoundPage, SignInPage, SignUpPage};
use crate::ui::{AuthLayout, RootLayout, Toaster, provide_auth_context, provide_toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_auth_context();
    provide_toaster();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/snapgram.css"/>

        <Title text="Snapgram"/>

        <Router>
            <main class="flex h-screen">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=path!("/sign-in")
                        view=|| view! { <AuthLayout><SignInPage/></AuthLayout> }
                    />
                    <Route
                        path=path!("/sign-up")
                        view=|| view! { <AuthLayout><SignUpPage/></AuthLayout> }
                    />
                    <Route
                        path=path!("/")
                        view=|| view! { <RootLayout><HomePage/></RootLayout> }
                    />
                </Routes>
            </main>
        </Router>

        <Toaster/>
    }
}
