use crate::core::validation::FieldErrors;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to a string signal, with an inline error line
#[component]
pub fn FormField(
    /// Field name, also used as the input id
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Validation message for this field
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called after every edit
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label for=name class="shad-form_label">{label}</label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="shad-input"
                class:border-red-500=move || error.get().is_some()
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(callback) = on_edit.as_ref() {
                        callback.run(());
                    }
                }
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Reactive message for one field of a form's error map
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// Edit callback that drops the field's message
pub fn clear_on_edit(errors: RwSignal<FieldErrors>, field: &'static str) -> Callback<()> {
    Callback::new(move |_| errors.update(|e| e.clear(field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_field_error_follows_map() {
        let owner = Owner::new();
        owner.with(|| {
            let errors = RwSignal::new(FieldErrors::new());
            let email = field_error(errors, "email");
            assert_eq!(email.get_untracked(), None);

            errors.update(|e| e.insert("email", "Invalid email"));
            assert_eq!(email.get_untracked(), Some("Invalid email".to_string()));

            clear_on_edit(errors, "email").run(());
            assert_eq!(email.get_untracked(), None);
        });
    }
}
