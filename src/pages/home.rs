//! Landing page with the trending feed.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::net::Api;

/// Home page. Shows trending events, falling back to a random sample
/// when the trending feed is empty or unavailable.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<Api>();

    let events = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match crate::net::api::events::trending(&api).await {
                    Ok(list) if !list.is_empty() => list,
                    _ => crate::net::api::events::random(&api)
                        .await
                        .unwrap_or_default(),
                }
            }
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Discover events near you"</h1>
                <p>"Concerts, meetups, talks, and more."</p>
                <a class="btn btn--primary" href="/events">
                    "Browse all events"
                </a>
            </section>

            <section class="home-page__trending">
                <h2>"Trending"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="home-page__empty">"No events to show yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="event-grid">
                                            {list
                                                .into_iter()
                                                .map(|event| view! { <EventCard event=event/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
