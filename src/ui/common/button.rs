use crate::ui::common::spinner::Loader;
use leptos::prelude::*;

/// Form submit button that swaps its label for a loader while busy
#[component]
pub fn SubmitButton(
    /// Label when idle
    label: &'static str,
    /// Whether a related request is in flight
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="shad-button_primary"
            disabled=move || loading.get()
        >
            <Show when=move || loading.get() fallback=move || label>
                <Loader />
            </Show>
        </button>
    }
}
