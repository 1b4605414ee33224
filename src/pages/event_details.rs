//! Event details page: full record, interest toggle, reviews.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::event_card::InterestButton;
use crate::components::review_section::ReviewSection;
use crate::net::Api;
use crate::net::types::EventDetail;
use crate::state::session::{Role, Session};

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let api = expect_context::<Api>();
    let session = expect_context::<RwSignal<Session>>();

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
        <div class="event-page">
            <Suspense fallback=move || view! { <p>"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|detail| match detail {
                            Some(detail) => {
                                let can_edit = move || {
                                    session
                                        .get()
                                        .user
                                        .is_some_and(|u| u.has_role(Role::Organizer))
                                };
                                view! { <EventBody detail=detail can_edit=Signal::derive(can_edit)/> }
                                    .into_any()
                            }
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

#[component]
fn EventBody(detail: EventDetail, can_edit: Signal<bool>) -> impl IntoView {
    let event_id = detail.event_id.clone();
    let edit_href = format!("/events/{}/edit", detail.event_id);
    let schedule = detail.details.and_then(|d| d.event_date);

    view! {
        <article class="event-detail">
            {detail
                .image_url
                .map(|url| view! { <img class="event-detail__image" src=url alt=""/> })}
            <h1>{detail.name}</h1>
            {detail.description.map(|text| view! { <p class="event-detail__description">{text}</p> })}

            <dl class="event-detail__meta">
                {schedule.map(|date| {
                    view! {
                        <dt>"Date"</dt>
                        <dd>{date}</dd>
                    }
                })}
                {detail.time.map(|time| {
                    view! {
                        <dt>"Time"</dt>
                        <dd>{time}</dd>
                    }
                })}
                {detail.duration.map(|duration| {
                    view! {
                        <dt>"Duration"</dt>
                        <dd>{duration}</dd>
                    }
                })}
                {detail.frequency.map(|frequency| {
                    view! {
                        <dt>"Frequency"</dt>
                        <dd>{frequency}</dd>
                    }
                })}
                {detail.capacity.map(|capacity| {
                    view! {
                        <dt>"Capacity"</dt>
                        <dd>{capacity}</dd>
                    }
                })}
                {detail.gender_allowance.map(|ga| {
                    view! {
                        <dt>"Open to"</dt>
                        <dd>{ga}</dd>
                    }
                })}
                {detail.address.map(|address| {
                    view! {
                        <dt>"Address"</dt>
                        <dd>{address}</dd>
                    }
                })}
                <dt>"Organizer"</dt>
                <dd>
                    {detail.organizer.username}
                    {detail
                        .organizer
                        .contact
                        .map(|contact| format!(" ({contact})"))}
                </dd>
            </dl>

            {detail
                .google_maps_link
                .map(|link| {
                    view! {
                        <a class="event-detail__map" href=link target="_blank">
                            "Open in Google Maps"
                        </a>
                    }
                })}

            <div class="event-detail__actions">
                <span class="event-detail__interest-count">
                    {detail.interest_count} " interested"
                </span>
                <InterestButton event_id=event_id.clone()/>
                <Show when=move || can_edit.get()>
                    {
                        let edit_href = edit_href.clone();
                        view! {
                            <a class="btn" href=edit_href>
                                "Edit details"
                            </a>
                        }
                    }
                </Show>
            </div>

            <ReviewSection event_id=event_id/>
        </article>
    }
}
