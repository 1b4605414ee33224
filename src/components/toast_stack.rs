//! Transient notification stack.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastLevel, ToastState};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const AUTO_CLOSE_MS: u64 = 3000;

/// Push a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, message: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push(level, message));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_CLOSE_MS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position stack rendering every live toast.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
