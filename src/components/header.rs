//! Site header: navigation plus session-aware auth links.

use leptos::prelude::*;

use crate::net::Api;
use crate::state::session::{Role, Session};

/// Top navigation bar. Organizer/admin links appear only for identities
/// holding those roles; the auth corner flips between sign-in links and
/// the profile/logout pair.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "XploreLCT"
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/events">"Events"</a>
                <Show when=move || {
                    session.get().user.is_some_and(|u| u.has_role(Role::Organizer))
                }>
                    <a href="/events/create">"Create Event"</a>
                </Show>
                <Show when=move || {
                    session.get().user.is_some_and(|u| u.has_role(Role::Admin))
                }>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <div class="site-header__auth">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Sign in"</a>
                            <a class="btn btn--primary" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="site-header__user" href="/profile">
                        {username}
                    </a>
                    <LogoutButton/>
                </Show>
            </div>
        </header>
    }
}

/// Logout action. The endpoint call ends the session and lands on the
/// login page whatever the backend answers.
#[component]
fn LogoutButton() -> impl IntoView {
    let api = expect_context::<Api>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::net::api::auth::logout(&api).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    };

    view! {
        <button class="btn" on:click=on_logout>
            "Logout"
        </button>
    }
}
