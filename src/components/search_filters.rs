//! Search controls: a free-text box and the dependent location facets
//! (country, then city, then place), each fed by the backend.

use leptos::prelude::*;

use crate::net::Api;

/// A search the page should run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchQuery {
    Text(String),
    Location {
        country: String,
        city: String,
        place: Option<String>,
    },
}

/// Filter bar. Emits a [`SearchQuery`] through `on_search`; fetching and
/// result state stay with the page.
#[component]
pub fn SearchFilters(on_search: Callback<SearchQuery>) -> impl IntoView {
    let api = expect_context::<Api>();

    let text = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let place = RwSignal::new(String::new());

    let countries = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                crate::net::api::locations::countries(&api)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    // Facet resources track their parent selection, so picking a country
    // fetches its cities and picking a city fetches its places.
    let cities = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let country = country.get();
            async move {
                if country.is_empty() {
                    Vec::new()
                } else {
                    crate::net::api::locations::cities(&api, &country)
                        .await
                        .unwrap_or_default()
                }
            }
        }
    });

    let places = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let city = city.get();
            async move {
                if city.is_empty() {
                    Vec::new()
                } else {
                    crate::net::api::locations::places(&api, &city)
                        .await
                        .unwrap_or_default()
                }
            }
        }
    });

    let submit_text = move || {
        let query = text.get();
        let query = query.trim();
        if !query.is_empty() {
            on_search.run(SearchQuery::Text(query.to_owned()));
        }
    };

    let submit_location = move |_| {
        let country = country.get();
        let city = city.get();
        if country.is_empty() || city.is_empty() {
            return;
        }
        let place = Some(place.get()).filter(|p| !p.is_empty());
        on_search.run(SearchQuery::Location {
            country,
            city,
            place,
        });
    };

    view! {
        <div class="search-filters">
            <div class="search-filters__text">
                <input
                    class="search-filters__input"
                    type="text"
                    placeholder="Search events"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_text();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| submit_text()>
                    "Search"
                </button>
            </div>

            <div class="search-filters__location">
                <select
                    class="search-filters__select"
                    on:change=move |ev| {
                        country.set(event_target_value(&ev));
                        city.set(String::new());
                        place.set(String::new());
                    }
                >
                    <option value="">"Country"</option>
                    {move || {
                        countries
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|name| {
                                        view! { <option value=name.clone()>{name.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>

                <select
                    class="search-filters__select"
                    on:change=move |ev| {
                        city.set(event_target_value(&ev));
                        place.set(String::new());
                    }
                >
                    <option value="">"City"</option>
                    {move || {
                        cities
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|name| {
                                        view! { <option value=name.clone()>{name.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>

                <select
                    class="search-filters__select"
                    on:change=move |ev| place.set(event_target_value(&ev))
                >
                    <option value="">"Place (optional)"</option>
                    {move || {
                        places
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|name| {
                                        view! { <option value=name.clone()>{name.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>

                <button class="btn" on:click=submit_location>
                    "Filter"
                </button>
            </div>
        </div>
    }
}
