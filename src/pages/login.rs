//! Sign-in page.

use leptos::prelude::*;

/// Login form. The credential field accepts username or email; the
/// backend decides which it is. Failure shows inline under the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let credential = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move || {
        let cred = credential.get();
        let pass = password.get();
        if cred.trim().is_empty() || pass.is_empty() {
            error.set(Some("Enter your credentials.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::auth::login(&api, cred.trim(), &pass).await {
                    Ok(_) => {
                        crate::components::toast_stack::notify(
                            toasts,
                            crate::state::toasts::ToastLevel::Success,
                            "Login successful!",
                        );
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cred, pass);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <label class="field">
                <span class="field__label">"Username or email"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || credential.get()
                    on:input=move |ev| credential.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Password"</span>
                <input
                    class="field__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown={
                        let submit = submit.clone();
                        move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    }
                />
            </label>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="auth-page__error">{message}</p> })
            }}
            <button class="btn btn--primary" on:click=move |_| submit()>
                "Sign in"
            </button>
            <p class="auth-page__alt">
                "No account yet? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
