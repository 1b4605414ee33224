//! Event search page: free text or location facets.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::search_filters::{SearchFilters, SearchQuery};
use crate::net::types::EventSummary;

#[component]
pub fn SearchPage() -> impl IntoView {
    let results = RwSignal::new(Vec::<EventSummary>::new());
    let searched = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();

    let on_search = Callback::new(move |query: SearchQuery| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let found = match query {
                    SearchQuery::Text(text) => {
                        crate::net::api::events::search_by_query(&api, &text).await
                    }
                    SearchQuery::Location {
                        country,
                        city,
                        place,
                    } => {
                        crate::net::api::events::search_by_location(
                            &api,
                            &country,
                            &city,
                            place.as_deref(),
                        )
                        .await
                    }
                };
                results.set(found.unwrap_or_default());
                searched.set(true);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    });

    view! {
        <div class="search-page">
            <h1>"Find events"</h1>
            <SearchFilters on_search=on_search/>

            <div class="search-page__results">
                {move || {
                    let list = results.get();
                    if list.is_empty() {
                        if searched.get() {
                            view! { <p class="search-page__empty">"No events matched."</p> }
                                .into_any()
                        } else {
                            view! {
                                <p class="search-page__hint">
                                    "Search by name or browse by location."
                                </p>
                            }
                                .into_any()
                        }
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
                }}
            </div>
        </div>
    }
}
