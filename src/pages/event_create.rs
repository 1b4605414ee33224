//! Event composition page for organizers.

use leptos::prelude::*;

use crate::components::form::{TextArea, TextField};
use crate::net::Api;

/// Create-event form. Everything is submitted as one multipart payload
/// because the cover image rides along with the fields.
#[component]
pub fn EventCreatePage() -> impl IntoView {
    let api = expect_context::<Api>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let town = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let place = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let google_maps_link = RwSignal::new(String::new());
    let frequency = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());
    let gender_allowance = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    let selected_speakers = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(Option::<String>::None);

    let image_input = NodeRef::<leptos::html::Input>::new();

    let speakers = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                crate::net::api::organizers::speakers(&api)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |_| {
        if name.get().trim().is_empty() {
            error.set(Some("The event needs a name.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let image = image_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let Ok(data) = web_sys::FormData::new() else {
                return;
            };
            let _ = data.append_with_str("name", name.get().trim());
            let _ = data.append_with_str("description", &description.get());
            let _ = data.append_with_str("country", &country.get());
            let _ = data.append_with_str("city", &city.get());
            let _ = data.append_with_str("town", &town.get());
            let _ = data.append_with_str("district", &district.get());
            let _ = data.append_with_str("place", &place.get());
            let _ = data.append_with_str("latitude", &latitude.get());
            let _ = data.append_with_str("longitude", &longitude.get());
            let _ = data.append_with_str("google_maps_link", &google_maps_link.get());
            let _ = data.append_with_str("frequency", &frequency.get());
            let _ = data.append_with_str("capacity", &capacity.get());
            let _ = data.append_with_str("gender_allowance", &gender_allowance.get());
            let _ = data.append_with_str("time", &time.get());
            let _ = data.append_with_str("duration", &duration.get());
            let _ = data.append_with_str("event_date", &event_date.get());
            let _ = data.append_with_str(
                "eventspeakers",
                &serde_json::to_string(&selected_speakers.get()).unwrap_or_default(),
            );
            if let Some(file) = image {
                let _ = data.append_with_blob("image", &file);
            }

            leptos::task::spawn_local(async move {
                if let Ok(created) = crate::net::api::events::create(&api, data).await {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Event created successfully!",
                    );
                    navigate(
                        &format!("/events/{}", created.event_id),
                        leptos_router::NavigateOptions::default(),
                    );
                }
            });
        }
    };

    view! {
        <div class="event-form-page">
            <h1>"Create event"</h1>

            <TextField label="Name" value=name/>
            <TextArea label="Description" value=description/>

            <fieldset class="event-form-page__group">
                <legend>"Location"</legend>
                <TextField label="Country" value=country/>
                <TextField label="City" value=city/>
                <TextField label="Town" value=town/>
                <TextField label="District" value=district/>
                <TextField label="Place" value=place/>
                <TextField label="Latitude" value=latitude/>
                <TextField label="Longitude" value=longitude/>
                <TextField label="Google Maps link" value=google_maps_link/>
            </fieldset>

            <fieldset class="event-form-page__group">
                <legend>"Schedule"</legend>
                <TextField label="Date" value=event_date input_type="date"/>
                <TextField label="Time" value=time input_type="time"/>
                <TextField label="Duration" value=duration/>
                <TextField label="Frequency" value=frequency/>
            </fieldset>

            <fieldset class="event-form-page__group">
                <legend>"Audience"</legend>
                <TextField label="Capacity" value=capacity input_type="number"/>
                <TextField label="Open to" value=gender_allowance/>
            </fieldset>

            <fieldset class="event-form-page__group">
                <legend>"Speakers"</legend>
                <Suspense fallback=move || view! { <p>"Loading speakers..."</p> }>
                    {move || {
                        speakers
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|speaker| {
                                        let id = speaker.speaker_id.clone();
                                        view! {
                                            <label class="event-form-page__speaker">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selected_speakers.get().contains(&id)
                                                    }
                                                    on:change={
                                                        let id = speaker.speaker_id.clone();
                                                        move |_| {
                                                            selected_speakers
                                                                .update(|ids| {
                                                                    if let Some(pos) = ids
                                                                        .iter()
                                                                        .position(|s| s == &id)
                                                                    {
                                                                        ids.remove(pos);
                                                                    } else {
                                                                        ids.push(id.clone());
                                                                    }
                                                                });
                                                        }
                                                    }
                                                />
                                                {speaker.name.clone()}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </fieldset>

            <label class="field">
                <span class="field__label">"Cover image"</span>
                <input class="field__input" type="file" accept="image/*" node_ref=image_input/>
            </label>

            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="event-form-page__error">{message}</p> })
            }}

            <button class="btn btn--primary" on:click=submit>
                "Create event"
            </button>
        </div>
    }
}
