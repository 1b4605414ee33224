//! Wire types for the backend REST surface.
//!
//! Successful bodies arrive wrapped in `{ "data": ... }`; error bodies
//! carry `{ "message": ... }` (handled in `client.rs`). Field names follow
//! the backend: snake_case on domain objects, camelCase on the auth
//! payloads.

use crate::state::session::Identity;

/// Uniform success envelope.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of a successful `refresh-token` exchange.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    pub access_token: String,
}

/// Body of a successful login or registration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthGrant {
    pub user: Identity,
    pub access_token: String,
}

/// Body of a successful event creation.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CreatedEvent {
    pub event_id: String,
}

/// An event as it appears in discovery feeds and search results.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventSummary {
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub interest_count: u32,
}

/// Organizer contact block on an event.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrganizerInfo {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Schedule details attached to an event after creation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventSchedule {
    #[serde(default)]
    pub event_date: Option<String>,
}

/// Full event record for the details page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventDetail {
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub gender_allowance: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub google_maps_link: Option<String>,
    #[serde(default)]
    pub organizer: OrganizerInfo,
    #[serde(default)]
    pub details: Option<EventSchedule>,
    #[serde(default)]
    pub interest_count: u32,
}

/// A review on an event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Review {
    pub review_id: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The caller's own profile.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A speaker available to organizers when composing an event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Speaker {
    pub speaker_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// An organization in the admin CRUD screens.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}
