//! Account registration page.

use leptos::prelude::*;

use crate::components::form::TextField;

/// Registration form. All account fields are plain text; the avatar is
/// optional and switches the submission to multipart when present.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let town = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let avatar_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |_| {
        if username.get().trim().is_empty() || email.get().trim().is_empty() {
            error.set(Some("Username and email are required.".to_owned()));
            return;
        }
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let form = crate::net::api::RegisterForm {
                username: username.get().trim().to_owned(),
                email: email.get().trim().to_owned(),
                phone: phone.get(),
                country: country.get(),
                city: city.get(),
                district: district.get(),
                town: town.get(),
                password: password.get(),
            };
            let avatar = avatar_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            leptos::task::spawn_local(async move {
                let result = match avatar {
                    Some(file) => {
                        let Ok(data) = web_sys::FormData::new() else {
                            return;
                        };
                        let _ = data.append_with_str("username", &form.username);
                        let _ = data.append_with_str("email", &form.email);
                        let _ = data.append_with_str("phone", &form.phone);
                        let _ = data.append_with_str("country", &form.country);
                        let _ = data.append_with_str("city", &form.city);
                        let _ = data.append_with_str("district", &form.district);
                        let _ = data.append_with_str("town", &form.town);
                        let _ = data.append_with_str("password", &form.password);
                        let _ = data.append_with_blob("avatar", &file);
                        crate::net::api::auth::register_multipart(&api, data).await
                    }
                    None => crate::net::api::auth::register(&api, &form).await,
                };

                if result.is_ok() {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Registration successful!",
                    );
                    navigate("/", leptos_router::NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
            <TextField label="Username" value=username/>
            <TextField label="Email" value=email input_type="email"/>
            <TextField label="Phone" value=phone/>
            <TextField label="Country" value=country/>
            <TextField label="City" value=city/>
            <TextField label="District" value=district/>
            <TextField label="Town" value=town/>
            <TextField label="Password" value=password input_type="password"/>
            <TextField label="Confirm password" value=confirm input_type="password"/>
            <label class="field">
                <span class="field__label">"Avatar (optional)"</span>
                <input class="field__input" type="file" accept="image/*" node_ref=avatar_input/>
            </label>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="auth-page__error">{message}</p> })
            }}
            <button class="btn btn--primary" on:click=submit>
                "Register"
            </button>
            <p class="auth-page__alt">
                "Already registered? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
