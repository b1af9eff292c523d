//! Toast notifications
//!
//! [`ToastManager`] owns the queue and is provided through context so any
//! component can raise a toast; [`Toaster`] renders the queue in a corner of
//! the viewport.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 3;

/// Default lifetime of a toast in milliseconds
const DEFAULT_DISMISS_MS: u32 = 5000;

/// A single toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub auto_dismiss_ms: u32,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            auto_dismiss_ms: DEFAULT_DISMISS_MS,
        }
    }
}

/// Toast with unique ID for tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Queue of visible toasts
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the toasts signal for the container
    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    /// Show a toast, dropping the oldest once the queue is full
    pub fn toast(&self, toast: Toast) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push_back(ToastItem { id, toast });

            while t.len() > MAX_TOASTS {
                t.pop_front();
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|i| i.id != id));
    }

}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a toast manager to the component tree
pub fn provide_toaster() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

/// Get the toast manager from the component tree
pub fn use_toaster() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Toast container, place once near the app root
#[component]
pub fn Toaster() -> impl IntoView {
    let manager = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm w-full">
            <For
                each=move || manager.toasts().get()
                key=|item| item.id
                children=move |item| {
                    view! { <ToastView item=item manager=manager /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastView(item: ToastItem, manager: ToastManager) -> impl IntoView {
    let id = item.id;
    let (is_exiting, _set_is_exiting) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let ms = item.toast.auto_dismiss_ms;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            _set_is_exiting.set(true);
            // Wait for exit animation
            TimeoutFuture::new(300).await;
            manager.dismiss(id);
        });
    }

    let title = item.toast.title;

    view! {
        <div
            class="flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 bg-dark-3 border-dark-4 text-light-1"
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold">{title}</h4>
            </div>
            <button
                class="opacity-70 hover:opacity-100 transition-opacity"
                aria-label="Close"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn titles(manager: &ToastManager) -> Vec<String> {
        manager
            .toasts()
            .get_untracked()
            .iter()
            .map(|i| i.toast.title.clone())
            .collect()
    }

    #[test]
    fn test_toast_defaults() {
        let toast = Toast::new("Sign in failed, Please try again.");

        assert_eq!(toast.title, "Sign in failed, Please try again.");
        assert_eq!(toast.auto_dismiss_ms, DEFAULT_DISMISS_MS);
    }

    #[test]
    fn test_queue_drops_oldest() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            for i in 0..5 {
                manager.toast(Toast::new(format!("toast {}", i)));
            }

            assert_eq!(titles(&manager), vec!["toast 2", "toast 3", "toast 4"]);
        });
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            let first = manager.toast(Toast::new("first"));
            manager.toast(Toast::new("second"));

            manager.dismiss(first);
            assert_eq!(titles(&manager), vec!["second"]);
        });
    }
}
