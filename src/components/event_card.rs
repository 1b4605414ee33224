//! Reusable card component for events in feeds and search results.

use leptos::prelude::*;

use crate::net::types::EventSummary;
use crate::state::session::Session;

/// A clickable card linking to an event's details page, with the
/// interest toggle for signed-in users.
#[component]
pub fn EventCard(event: EventSummary) -> impl IntoView {
    let href = format!("/events/{}", event.event_id);
    let event_id = event.event_id.clone();

    view! {
        <div class="event-card">
            <a class="event-card__body" href=href>
                {event
                    .image_url
                    .map(|url| view! { <img class="event-card__image" src=url alt=""/> })}
                <h3 class="event-card__name">{event.name}</h3>
                {event
                    .event_date
                    .map(|date| view! { <span class="event-card__date">{date}</span> })}
                {event
                    .address
                    .map(|addr| view! { <span class="event-card__address">{addr}</span> })}
            </a>
            <div class="event-card__meta">
                <span class="event-card__interest-count">
                    {event.interest_count} " interested"
                </span>
                <InterestButton event_id=event_id/>
            </div>
        </div>
    }
}

/// Interest toggle. Hidden while logged out; a session that expires
/// mid-click is handled by the gateway's refresh protocol.
#[component]
pub fn InterestButton(event_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let event_id = event_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::users::toggle_interested(&api, &event_id)
                    .await
                    .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Event interest updated!",
                    );
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &event_id;
        }
    };

    view! {
        <Show when=move || session.get().is_authenticated()>
            {
                // Show re-renders its children, so hand each render its
                // own copy of the handler.
                let on_toggle = on_toggle.clone();
                view! {
                    <button class="btn event-card__interest" on:click=on_toggle>
                        "Interested"
                    </button>
                }
            }
        </Show>
    }
}
