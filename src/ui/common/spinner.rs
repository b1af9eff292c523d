use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4",
            SpinnerSize::Medium => "w-6 h-6",
            SpinnerSize::Large => "w-10 h-10",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Whether to center the spinner
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let classes = format!(
        "animate-spin rounded-full border-2 border-light-3 border-t-transparent {}",
        size.class()
    );
    let container_class = if centered {
        "flex-center w-full h-full"
    } else {
        "inline-flex"
    };

    view! {
        <div class=container_class>
            <div class=classes role="status" aria-live="polite">
                <span class="sr-only">"Loading..."</span>
            </div>
        </div>
    }
}

/// Inline loader shown inside buttons
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex-center gap-2">
            <Spinner size=SpinnerSize::Small />
            "Loading..."
        </div>
    }
}
