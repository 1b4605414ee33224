//! Route guard wrapper: gates children behind a navigation tier.
//!
//! The decision itself is the pure predicate in `state::access`; this
//! component re-evaluates it against the mirrored session signal, so a
//! logout revokes access on the next render, and issues the redirect as a
//! side effect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::access::{self, RouteTier};
use crate::state::session::Session;

/// Render children only when the current session passes `tier`;
/// otherwise redirect per the tier rule (login or home).
#[component]
pub fn Protected(tier: RouteTier, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = access::evaluate(tier, &session.get()).redirect() {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || access::evaluate(tier, &session.get()).is_allowed()>
            {children()}
        </Show>
    }
}
