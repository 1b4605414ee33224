#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Roles the backend may attach to an identity. An identity can hold any
/// combination of the non-member roles at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Organizer,
    Speaker,
    Admin,
}

/// The authenticated user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Set-valued; the backend sends this as `role`.
    #[serde(alias = "role", default)]
    pub roles: Vec<Role>,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Current session snapshot.
///
/// Invariant: `access_token` is present if and only if `user` is present.
/// Both are set together by login/register/refresh and cleared together by
/// logout or an unrecoverable auth failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<Identity>,
    pub access_token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Durable storage behind the session store. Production uses browser
/// localStorage (`util::storage::LocalStorage`); tests inject `MemoryPersist`.
pub trait SessionPersist {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// In-memory persistence for tests and non-browser rendering.
#[derive(Default)]
pub struct MemoryPersist {
    slot: Mutex<Option<String>>,
}

impl SessionPersist for MemoryPersist {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, raw: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

type ChangeListener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Single source of truth for "who is logged in".
///
/// A cloneable handle: the API gateway, route guards, and UI all share the
/// same underlying state. Every mutation is mirrored to the injected
/// persistence backend so a fresh process restores the last known session
/// before any network call completes. Reads are synchronous and never
/// fail; execution is single-threaded in the browser, the locks only
/// satisfy the framework's thread-safety bounds and are never contended.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<Mutex<Session>>,
    persist: Arc<dyn SessionPersist + Send + Sync>,
    listener: Arc<Mutex<Option<ChangeListener>>>,
}

impl SessionStore {
    /// Create a store, restoring the persisted session if one exists.
    ///
    /// A persisted blob that fails to parse, or that violates the
    /// token-iff-user invariant, is discarded and treated as logged out.
    pub fn restore(persist: Arc<dyn SessionPersist + Send + Sync>) -> Self {
        let session = persist
            .load()
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .filter(|s| s.user.is_some() == s.access_token.is_some())
            .unwrap_or_default();

        Self {
            current: Arc::new(Mutex::new(session)),
            persist,
            listener: Arc::new(Mutex::new(None)),
        }
    }

    /// Current snapshot; never blocks, never fails.
    pub fn snapshot(&self) -> Session {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The bearer token, if a session is live.
    pub fn token(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    /// Unconditionally overwrite both fields. No token validation.
    pub fn set_session(&self, user: Identity, access_token: String) {
        self.commit(Session {
            user: Some(user),
            access_token: Some(access_token),
        });
    }

    /// Clear both fields. Idempotent.
    pub fn clear_session(&self) {
        self.commit(Session::default());
    }

    /// Register the single change listener (the Leptos layer mirrors
    /// snapshots into a signal here). Replaces any previous listener.
    pub fn on_change(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        *self.listener.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(listener));
    }

    fn commit(&self, session: Session) {
        if session.user.is_some() {
            if let Ok(raw) = serde_json::to_string(&session) {
                self.persist.save(&raw);
            }
        } else {
            self.persist.clear();
        }

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();

        let listener = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(listener) = listener {
            listener(&session);
        }
    }
}
