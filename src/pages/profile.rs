//! Profile page: account details, interested events, and role enrollment.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::form::{TextArea, TextField};
use crate::net::Api;
use crate::net::types::UserProfile;
use crate::state::session::{Role, Session};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<RwSignal<Session>>();

    let profile = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { crate::net::api::users::profile(&api).await.ok() }
        }
    });

    let interested = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                crate::net::api::users::interested_events(&api)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    let missing_organizer = move || {
        session
            .get()
            .user
            .is_some_and(|u| !u.has_role(Role::Organizer))
    };
    let missing_speaker = move || {
        session
            .get()
            .user
            .is_some_and(|u| !u.has_role(Role::Speaker))
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|loaded| {
                            loaded
                                .map(|profile| view! { <ProfileForm profile=profile/> }.into_any())
                                .unwrap_or_else(|| {
                                    view! {
                                        <p class="profile-page__error">
                                            "Could not load your profile."
                                        </p>
                                    }
                                        .into_any()
                                })
                        })
                }}
            </Suspense>

            <section class="profile-page__interested">
                <h2>"Events you are interested in"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        interested
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="profile-page__empty">"Nothing saved yet."</p>
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

            <Show when=missing_organizer>
                <BecomeOrganizer/>
            </Show>
            <Show when=missing_speaker>
                <BecomeSpeaker/>
            </Show>
        </div>
    }
}

/// Editable account fields, pre-filled from the fetched profile. The
/// avatar is optional and switches the save to multipart.
#[component]
fn ProfileForm(profile: UserProfile) -> impl IntoView {
    let username = RwSignal::new(profile.username);
    let email = RwSignal::new(profile.email);
    let phone = RwSignal::new(profile.phone.unwrap_or_default());
    let age = RwSignal::new(profile.age.map(|a| a.to_string()).unwrap_or_default());
    let profession = RwSignal::new(profile.profession.unwrap_or_default());
    let education = RwSignal::new(profile.education.unwrap_or_default());
    let country = RwSignal::new(profile.country.unwrap_or_default());
    let city = RwSignal::new(profile.city.unwrap_or_default());
    let district = RwSignal::new(profile.district.unwrap_or_default());
    let town = RwSignal::new(profile.town.unwrap_or_default());
    let avatar_url = profile.avatar_url;

    let avatar_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let updated = UserProfile {
                username: username.get(),
                email: email.get(),
                phone: Some(phone.get()).filter(|s| !s.is_empty()),
                age: age.get().trim().parse().ok(),
                profession: Some(profession.get()).filter(|s| !s.is_empty()),
                education: Some(education.get()).filter(|s| !s.is_empty()),
                country: Some(country.get()).filter(|s| !s.is_empty()),
                city: Some(city.get()).filter(|s| !s.is_empty()),
                district: Some(district.get()).filter(|s| !s.is_empty()),
                town: Some(town.get()).filter(|s| !s.is_empty()),
                avatar_url: None,
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
                        let _ = data.append_with_str("username", &updated.username);
                        let _ = data.append_with_str("email", &updated.email);
                        let _ = data.append_with_str(
                            "phone",
                            updated.phone.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "age",
                            &updated.age.map(|a| a.to_string()).unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "profession",
                            updated.profession.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "education",
                            updated.education.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "country",
                            updated.country.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "city",
                            updated.city.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "district",
                            updated.district.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_str(
                            "town",
                            updated.town.as_deref().unwrap_or_default(),
                        );
                        let _ = data.append_with_blob("avatar", &file);
                        crate::net::api::users::update_profile_multipart(&api, data).await
                    }
                    None => crate::net::api::users::update_profile(&api, &updated).await,
                };

                if result.is_ok() {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Profile updated!",
                    );
                }
            });
        }
    };

    view! {
        <div class="profile-form">
            {avatar_url
                .map(|url| view! { <img class="profile-form__avatar" src=url alt="Avatar"/> })}
            <TextField label="Username" value=username/>
            <TextField label="Email" value=email input_type="email"/>
            <TextField label="Phone" value=phone/>
            <TextField label="Age" value=age input_type="number"/>
            <TextField label="Profession" value=profession/>
            <TextField label="Education" value=education/>
            <TextField label="Country" value=country/>
            <TextField label="City" value=city/>
            <TextField label="District" value=district/>
            <TextField label="Town" value=town/>
            <label class="field">
                <span class="field__label">"New avatar (optional)"</span>
                <input class="field__input" type="file" accept="image/*" node_ref=avatar_input/>
            </label>
            <button class="btn btn--primary" on:click=save>
                "Save changes"
            </button>
        </div>
    }
}

/// Organizer enrollment for members who have not applied yet.
#[component]
fn BecomeOrganizer() -> impl IntoView {
    let organization = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let submit = move |_| {
        if organization.get().trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::organizers::register(
                    &api,
                    organization.get_untracked().trim(),
                    contact.get_untracked().trim(),
                )
                .await
                .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Organizer application submitted!",
                    );
                }
            });
        }
    };

    view! {
        <section class="enroll">
            <h2>"Become an organizer"</h2>
            <TextField label="Organization" value=organization/>
            <TextField label="Contact" value=contact/>
            <button class="btn" on:click=submit>
                "Apply"
            </button>
        </section>
    }
}

/// Speaker enrollment for members who have not applied yet.
#[component]
fn BecomeSpeaker() -> impl IntoView {
    let bio = RwSignal::new(String::new());
    let expertise = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let submit = move |_| {
        if bio.get().trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::speakers::register(
                    &api,
                    bio.get_untracked().trim(),
                    expertise.get_untracked().trim(),
                )
                .await
                .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Speaker application submitted!",
                    );
                }
            });
        }
    };

    view! {
        <section class="enroll">
            <h2>"Become a speaker"</h2>
            <TextArea label="Bio" value=bio/>
            <TextField label="Expertise" value=expertise/>
            <button class="btn" on:click=submit>
                "Apply"
            </button>
        </section>
    }
}
