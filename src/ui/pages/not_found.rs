//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="h3-bold mb-2">"Page Not Found"</h2>

                <p class="text-light-3 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="shad-button_primary px-6 py-3">
                        "Go Home"
                    </A>
                    <A href="/sign-in" attr:class="shad-button_ghost px-6 py-3">
                        "Log In"
                    </A>
                </div>
            </div>
        </div>
    }
}
