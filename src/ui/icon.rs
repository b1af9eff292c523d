use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/assets/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/assets/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOGOUT: &str = "logout";
}
