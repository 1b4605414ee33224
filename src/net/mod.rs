//! Networking: the API gateway, the production fetch transport, and the
//! named endpoint surface.

pub mod api;
pub mod client;
pub mod http;
pub mod types;

/// The gateway as the UI sees it: the production fetch transport plugged in.
pub type Api = client::ApiClient<http::HttpTransport>;

/// Backend base URL. Fixed configuration value.
pub const API_BASE: &str = "http://localhost:5000";

/// Fixed backend paths shared between the gateway and the endpoint layer.
pub mod paths {
    pub const USERS_LOGIN: &str = "/api/users/login";
    pub const USERS_REGISTER: &str = "/api/users/register";
    pub const USERS_LOGOUT: &str = "/api/users/logout";
    pub const USERS_REFRESH_TOKEN: &str = "/api/users/refresh-token";
    pub const USERS_PROFILE: &str = "/api/users/profile";
    pub const USERS_PROFILE_UPDATE: &str = "/api/users/profile/update";
    pub const USERS_INTERESTED_EVENTS: &str = "/api/users/interested-events";

    pub const EVENTS: &str = "/api/events";
    pub const EVENTS_TRENDING: &str = "/api/events/trending";
    pub const EVENTS_RANDOM: &str = "/api/events/random";
    pub const EVENTS_SEARCH: &str = "/api/events/search";
    pub const EVENTS_CREATE: &str = "/api/events/create";
    pub const EVENTS_COUNTRIES: &str = "/api/events/countries";

    pub const ORGANIZERS_REGISTER: &str = "/api/organizers/register";
    pub const ORGANIZERS_PROFILE: &str = "/api/organizers/profile";
    pub const ORGANIZERS_SPEAKERS: &str = "/api/organizers/speakers";
    pub const ORGANIZERS_EVENTS: &str = "/api/organizers/events";

    pub const SPEAKERS_REGISTER: &str = "/api/speakers/register";

    pub const ADMIN_ORGANIZATIONS: &str = "/api/admin/organizations";
    pub const ADMIN_CREATE_ORGANIZATION: &str = "/api/admin/create-organization";
}
