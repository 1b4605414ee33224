//! Schedule details editor for an existing event.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::form::TextField;
use crate::net::Api;
use crate::net::types::EventDetail;

#[component]
pub fn EventEditPage() -> impl IntoView {
    let params = use_params_map();
    let api = expect_context::<Api>();

    let event = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = params.get().get("id").unwrap_or_default();
            async move {
                if id.is_empty() {
                    None
                } else {
                    crate::net::api::events::by_id(&api, &id).await.ok()
                }
            }
        }
    });

    view! {
        <div class="event-form-page">
            <Suspense fallback=move || view! { <p>"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|detail| match detail {
                            Some(detail) => view! { <ScheduleForm detail=detail/> }.into_any(),
                            None => {
                                view! { <p class="event-page__missing">"Event not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Pre-filled schedule fields; saving posts the details block and returns
/// to the event page.
#[component]
fn ScheduleForm(detail: EventDetail) -> impl IntoView {
    let event_id = detail.event_id.clone();
    let event_date = RwSignal::new(
        detail
            .details
            .and_then(|d| d.event_date)
            .unwrap_or_default(),
    );
    let time = RwSignal::new(detail.time.unwrap_or_default());
    let duration = RwSignal::new(detail.duration.unwrap_or_default());
    let frequency = RwSignal::new(detail.frequency.unwrap_or_default());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let event_id = event_id.clone();
            let details = serde_json::json!({
                "event_date": event_date.get(),
                "time": time.get(),
                "duration": duration.get(),
                "frequency": frequency.get(),
            });
            leptos::task::spawn_local(async move {
                if crate::net::api::events::add_details(&api, &event_id, details)
                    .await
                    .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Event details updated!",
                    );
                    navigate(
                        &format!("/events/{event_id}"),
                        leptos_router::NavigateOptions::default(),
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
        <div class="event-form">
            <h1>"Edit event details"</h1>
            <h2>{detail.name}</h2>

            <TextField label="Date" value=event_date input_type="date"/>
            <TextField label="Time" value=time input_type="time"/>
            <TextField label="Duration" value=duration/>
            <TextField label="Frequency" value=frequency/>

            <button class="btn btn--primary" on:click=submit>
                "Save details"
            </button>
        </div>
    }
}
