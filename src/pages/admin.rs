//! Admin console: organization CRUD.

use leptos::prelude::*;

use crate::components::form::{TextArea, TextField};
use crate::net::Api;
use crate::net::types::Organization;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let organizations = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                crate::net::api::admin::organizations(&api)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    let editing = RwSignal::new(Option::<Organization>::None);

    view! {
        <div class="admin-page">
            <h1>"Organizations"</h1>

            <CreateOrganization organizations=organizations/>

            <Suspense fallback=move || view! { <p>"Loading organizations..."</p> }>
                {move || {
                    organizations
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="admin-page__empty">"No organizations yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="admin-page__list">
                                        {list
                                            .into_iter()
                                            .map(|org| {
                                                view! {
                                                    <OrganizationRow
                                                        org=org
                                                        editing=editing
                                                        organizations=organizations
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                editing
                    .get()
                    .map(|org| {
                        view! {
                            <EditOrganizationDialog
                                org=org
                                editing=editing
                                organizations=organizations
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn OrganizationRow(
    org: Organization,
    editing: RwSignal<Option<Organization>>,
    organizations: LocalResource<Vec<Organization>>,
) -> impl IntoView {
    let for_edit = org.clone();
    let org_id = org.id.clone();

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let org_id = org_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::admin::delete_organization(&api, &org_id)
                    .await
                    .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Organization deleted.",
                    );
                    organizations.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&org_id, &organizations);
        }
    };

    view! {
        <li class="admin-org">
            {org
                .logo_url
                .map(|url| view! { <img class="admin-org__logo" src=url alt=""/> })}
            <span class="admin-org__name">{org.name}</span>
            {org
                .description
                .map(|text| view! { <span class="admin-org__description">{text}</span> })}
            <div class="admin-org__actions">
                <button class="btn" on:click=move |_| editing.set(Some(for_edit.clone()))>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn CreateOrganization(organizations: LocalResource<Vec<Organization>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let submit = move |_| {
        if name.get().trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::admin::create_organization(
                    &api,
                    name.get_untracked().trim(),
                    description.get_untracked().trim(),
                )
                .await
                .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Organization created.",
                    );
                    name.set(String::new());
                    description.set(String::new());
                    organizations.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &organizations;
        }
    };

    view! {
        <section class="admin-page__create">
            <h2>"New organization"</h2>
            <TextField label="Name" value=name/>
            <TextArea label="Description" value=description/>
            <button class="btn btn--primary" on:click=submit>
                "Create"
            </button>
        </section>
    }
}

/// Modal editor for one organization.
#[component]
fn EditOrganizationDialog(
    org: Organization,
    editing: RwSignal<Option<Organization>>,
    organizations: LocalResource<Vec<Organization>>,
) -> impl IntoView {
    let org_id = org.id.clone();
    let name = RwSignal::new(org.name);
    let description = RwSignal::new(org.description.unwrap_or_default());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let org_id = org_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::admin::update_organization(
                    &api,
                    &org_id,
                    name.get_untracked().trim(),
                    description.get_untracked().trim(),
                )
                .await
                .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Organization updated.",
                    );
                    editing.set(None);
                    organizations.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&org_id, &organizations);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit organization"</h2>
                <TextField label="Name" value=name/>
                <TextArea label="Description" value=description/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| editing.set(None)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
