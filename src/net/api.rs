//! Named endpoint functions over the API gateway, grouped by backend area.
//!
//! Every function decodes the `{ "data": ... }` success envelope; error
//! handling (toasts, refresh-on-401, forced logout) happens inside
//! [`super::client::ApiClient::dispatch`]. The auth group is the only one
//! with session side effects: login/register populate the session store,
//! logout destroys it.

use serde_json::json;

use super::client::{ApiClient, ApiError, ApiRequest, Transport};
use super::paths;
#[cfg(feature = "hydrate")]
use super::types::CreatedEvent;
use super::types::{
    AuthGrant, Envelope, EventDetail, EventSummary, Organization, OrganizerInfo, Review, Speaker,
    UserProfile,
};
use crate::state::session::Identity;

/// Account fields for self-registration.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub district: String,
    pub town: String,
    pub password: String,
}

pub mod auth {
    use super::*;

    /// Exchange credentials for a session. On success the session store
    /// holds the returned identity and token.
    pub async fn login<T: Transport>(
        api: &ApiClient<T>,
        credential: &str,
        password: &str,
    ) -> Result<Identity, ApiError> {
        let req = ApiRequest::post(paths::USERS_LOGIN).json(json!({
            "credential": credential,
            "password": password,
        }));
        let grant: Envelope<AuthGrant> = api.dispatch(req).await?.json()?;
        api.session()
            .set_session(grant.data.user.clone(), grant.data.access_token);
        Ok(grant.data.user)
    }

    /// Create an account; the returned session is stored like a login.
    pub async fn register<T: Transport>(
        api: &ApiClient<T>,
        form: &RegisterForm,
    ) -> Result<Identity, ApiError> {
        let req = ApiRequest::post(paths::USERS_REGISTER).json(json!({
            "username": form.username,
            "email": form.email,
            "phone": form.phone,
            "country": form.country,
            "city": form.city,
            "district": form.district,
            "town": form.town,
            "password": form.password,
        }));
        let grant: Envelope<AuthGrant> = api.dispatch(req).await?.json()?;
        api.session()
            .set_session(grant.data.user.clone(), grant.data.access_token);
        Ok(grant.data.user)
    }

    /// Registration with an avatar file attached.
    #[cfg(feature = "hydrate")]
    pub async fn register_multipart<T: Transport>(
        api: &ApiClient<T>,
        form: web_sys::FormData,
    ) -> Result<Identity, ApiError> {
        let req = ApiRequest::post(paths::USERS_REGISTER).multipart(form);
        let grant: Envelope<AuthGrant> = api.dispatch(req).await?.json()?;
        api.session()
            .set_session(grant.data.user.clone(), grant.data.access_token);
        Ok(grant.data.user)
    }

    /// Terminate the session. Whatever the backend answers, the local
    /// session ends and the app lands on the login page; the gateway
    /// already handles the failure side of that, the success side is here.
    pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), ApiError> {
        api.dispatch(ApiRequest::post(paths::USERS_LOGOUT)).await?;
        api.session().clear_session();
        crate::util::nav::force_login();
        Ok(())
    }
}

pub mod users {
    use super::*;

    pub async fn profile<T: Transport>(api: &ApiClient<T>) -> Result<UserProfile, ApiError> {
        let body: Envelope<UserProfile> = api
            .dispatch(ApiRequest::get(paths::USERS_PROFILE))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn update_profile<T: Transport>(
        api: &ApiClient<T>,
        profile: &UserProfile,
    ) -> Result<UserProfile, ApiError> {
        let req = ApiRequest::patch(paths::USERS_PROFILE_UPDATE).json(json!(profile));
        let body: Envelope<UserProfile> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    /// Profile update with a new avatar file attached.
    #[cfg(feature = "hydrate")]
    pub async fn update_profile_multipart<T: Transport>(
        api: &ApiClient<T>,
        form: web_sys::FormData,
    ) -> Result<UserProfile, ApiError> {
        let req = ApiRequest::patch(paths::USERS_PROFILE_UPDATE).multipart(form);
        let body: Envelope<UserProfile> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    pub async fn interested_events<T: Transport>(
        api: &ApiClient<T>,
    ) -> Result<Vec<EventSummary>, ApiError> {
        let body: Envelope<Vec<EventSummary>> = api
            .dispatch(ApiRequest::get(paths::USERS_INTERESTED_EVENTS))
            .await?
            .json()?;
        Ok(body.data)
    }

    /// Flip the caller's interest flag on an event.
    pub async fn toggle_interested<T: Transport>(
        api: &ApiClient<T>,
        event_id: &str,
    ) -> Result<(), ApiError> {
        api.dispatch(ApiRequest::post(format!("/api/users/interested/{event_id}")))
            .await?;
        Ok(())
    }
}

pub mod events {
    use super::*;

    /// Trending feed. Silent: the home page falls back to [`random`] when
    /// this fails, so no toast.
    pub async fn trending<T: Transport>(api: &ApiClient<T>) -> Result<Vec<EventSummary>, ApiError> {
        let body: Envelope<Vec<EventSummary>> = api
            .dispatch(ApiRequest::get(paths::EVENTS_TRENDING).silent())
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn random<T: Transport>(api: &ApiClient<T>) -> Result<Vec<EventSummary>, ApiError> {
        let body: Envelope<Vec<EventSummary>> = api
            .dispatch(ApiRequest::get(paths::EVENTS_RANDOM))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn search_by_query<T: Transport>(
        api: &ApiClient<T>,
        query: &str,
    ) -> Result<Vec<EventSummary>, ApiError> {
        let req = ApiRequest::get(paths::EVENTS_SEARCH).query("query", query);
        let body: Envelope<Vec<EventSummary>> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    pub async fn search_by_location<T: Transport>(
        api: &ApiClient<T>,
        country: &str,
        city: &str,
        place: Option<&str>,
    ) -> Result<Vec<EventSummary>, ApiError> {
        let mut req = ApiRequest::get(paths::EVENTS)
            .query("country", country)
            .query("city", city);
        if let Some(place) = place {
            req = req.query("place", place);
        }
        let body: Envelope<Vec<EventSummary>> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    pub async fn by_id<T: Transport>(
        api: &ApiClient<T>,
        event_id: &str,
    ) -> Result<EventDetail, ApiError> {
        let body: Envelope<EventDetail> = api
            .dispatch(ApiRequest::get(format!("/api/events/{event_id}")))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn reviews<T: Transport>(
        api: &ApiClient<T>,
        event_id: &str,
    ) -> Result<Vec<Review>, ApiError> {
        let body: Envelope<Vec<Review>> = api
            .dispatch(ApiRequest::get(format!("/api/events/{event_id}/reviews")))
            .await?
            .json()?;
        Ok(body.data)
    }

    /// Create an event from a multipart form (image file included).
    #[cfg(feature = "hydrate")]
    pub async fn create<T: Transport>(
        api: &ApiClient<T>,
        form: web_sys::FormData,
    ) -> Result<CreatedEvent, ApiError> {
        let req = ApiRequest::post(paths::EVENTS_CREATE).multipart(form);
        let body: Envelope<CreatedEvent> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    /// Attach or update schedule details on an existing event.
    pub async fn add_details<T: Transport>(
        api: &ApiClient<T>,
        event_id: &str,
        details: serde_json::Value,
    ) -> Result<(), ApiError> {
        api.dispatch(ApiRequest::post(format!("/api/events/{event_id}/details")).json(details))
            .await?;
        Ok(())
    }

    pub async fn add_review<T: Transport>(
        api: &ApiClient<T>,
        event_id: &str,
        rating: u8,
        comment: &str,
    ) -> Result<(), ApiError> {
        let req = ApiRequest::post(format!("/api/events/{event_id}/review")).json(json!({
            "rating": rating,
            "comment": comment,
        }));
        api.dispatch(req).await?;
        Ok(())
    }
}

pub mod locations {
    use super::*;

    pub async fn countries<T: Transport>(api: &ApiClient<T>) -> Result<Vec<String>, ApiError> {
        let body: Envelope<Vec<String>> = api
            .dispatch(ApiRequest::get(paths::EVENTS_COUNTRIES))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn cities<T: Transport>(
        api: &ApiClient<T>,
        country: &str,
    ) -> Result<Vec<String>, ApiError> {
        let body: Envelope<Vec<String>> = api
            .dispatch(ApiRequest::get(format!("/api/events/cities/{country}")))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn places<T: Transport>(
        api: &ApiClient<T>,
        city: &str,
    ) -> Result<Vec<String>, ApiError> {
        let body: Envelope<Vec<String>> = api
            .dispatch(ApiRequest::get(format!("/api/events/locations/{city}")))
            .await?
            .json()?;
        Ok(body.data)
    }
}

pub mod organizers {
    use super::*;

    /// Enroll the current user as an organizer.
    pub async fn register<T: Transport>(
        api: &ApiClient<T>,
        organization: &str,
        contact: &str,
    ) -> Result<(), ApiError> {
        let req = ApiRequest::post(paths::ORGANIZERS_REGISTER).json(json!({
            "organization": organization,
            "contact": contact,
        }));
        api.dispatch(req).await?;
        Ok(())
    }

    pub async fn profile<T: Transport>(api: &ApiClient<T>) -> Result<OrganizerInfo, ApiError> {
        let body: Envelope<OrganizerInfo> = api
            .dispatch(ApiRequest::get(paths::ORGANIZERS_PROFILE))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn speakers<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Speaker>, ApiError> {
        let body: Envelope<Vec<Speaker>> = api
            .dispatch(ApiRequest::get(paths::ORGANIZERS_SPEAKERS))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn events<T: Transport>(api: &ApiClient<T>) -> Result<Vec<EventSummary>, ApiError> {
        let body: Envelope<Vec<EventSummary>> = api
            .dispatch(ApiRequest::get(paths::ORGANIZERS_EVENTS))
            .await?
            .json()?;
        Ok(body.data)
    }
}

pub mod speakers {
    use super::*;

    /// Enroll the current user as a speaker.
    pub async fn register<T: Transport>(
        api: &ApiClient<T>,
        bio: &str,
        expertise: &str,
    ) -> Result<(), ApiError> {
        let req = ApiRequest::post(paths::SPEAKERS_REGISTER).json(json!({
            "bio": bio,
            "expertise": expertise,
        }));
        api.dispatch(req).await?;
        Ok(())
    }
}

pub mod admin {
    use super::*;

    pub async fn organizations<T: Transport>(
        api: &ApiClient<T>,
    ) -> Result<Vec<Organization>, ApiError> {
        let body: Envelope<Vec<Organization>> = api
            .dispatch(ApiRequest::get(paths::ADMIN_ORGANIZATIONS))
            .await?
            .json()?;
        Ok(body.data)
    }

    pub async fn create_organization<T: Transport>(
        api: &ApiClient<T>,
        name: &str,
        description: &str,
    ) -> Result<Organization, ApiError> {
        let req = ApiRequest::post(paths::ADMIN_CREATE_ORGANIZATION).json(json!({
            "name": name,
            "description": description,
        }));
        let body: Envelope<Organization> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    pub async fn update_organization<T: Transport>(
        api: &ApiClient<T>,
        org_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Organization, ApiError> {
        let req = ApiRequest::put(format!("/api/admin/organizations/{org_id}")).json(json!({
            "name": name,
            "description": description,
        }));
        let body: Envelope<Organization> = api.dispatch(req).await?.json()?;
        Ok(body.data)
    }

    pub async fn delete_organization<T: Transport>(
        api: &ApiClient<T>,
        org_id: &str,
    ) -> Result<(), ApiError> {
        api.dispatch(ApiRequest::delete(format!("/api/admin/organizations/{org_id}")))
            .await?;
        Ok(())
    }
}
