//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guards::Protected;
use crate::components::header::Header;
use crate::components::toast_stack::{ToastStack, notify};
use crate::net::client::GatewayHooks;
use crate::net::http::HttpTransport;
use crate::net::Api;
use crate::pages::{
    admin::AdminPage, event_create::EventCreatePage, event_details::EventDetailsPage,
    event_edit::EventEditPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, search::SearchPage,
};
use crate::state::access::RouteTier;
use crate::state::session::SessionStore;
use crate::state::toasts::ToastState;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session, wires the session store, toast queue,
/// and API gateway together, provides them as contexts, and sets up
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::restore(Arc::new(LocalStorage));
    let session = RwSignal::new(store.snapshot());
    store.on_change(move |snap| session.set(snap.clone()));

    let toasts = RwSignal::new(ToastState::default());

    let hooks = GatewayHooks {
        notify: Arc::new(move |level, message| notify(toasts, level, message)),
        goto_login: Arc::new(crate::util::nav::force_login),
    };
    let api = Api::new(HttpTransport::new(), store, hooks);

    provide_context(session);
    provide_context(toasts);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/xplore-ui.css"/>
        <Title text="XploreLCT"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("events") view=SearchPage/>
                    <Route
                        path=(StaticSegment("events"), StaticSegment("create"))
                        view=|| {
                            view! {
                                <Protected tier=RouteTier::Organizer>
                                    <EventCreatePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"))
                        view=EventDetailsPage
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| {
                            view! {
                                <Protected tier=RouteTier::Organizer>
                                    <EventEditPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <Protected tier=RouteTier::Authenticated>
                                    <ProfilePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <Protected tier=RouteTier::Admin>
                                    <AdminPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}
