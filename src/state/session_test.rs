use std::sync::Arc;

use super::*;

fn alice() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        roles: vec![Role::Member, Role::Organizer],
    }
}

fn store() -> SessionStore {
    SessionStore::restore(Arc::new(MemoryPersist::default()))
}

// =============================================================
// Session invariant
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let session = Session::default();
    assert!(session.user.is_none());
    assert!(session.access_token.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn snapshot_reflects_most_recent_mutation() {
    let store = store();
    store.set_session(alice(), "tok-1".to_owned());
    store.set_session(alice(), "tok-2".to_owned());

    let snap = store.snapshot();
    assert_eq!(snap.access_token.as_deref(), Some("tok-2"));
    assert_eq!(snap.user.map(|u| u.username), Some("alice".to_owned()));
}

#[test]
fn token_presence_always_matches_user_presence() {
    let store = store();
    let snap = store.snapshot();
    assert_eq!(snap.user.is_some(), snap.access_token.is_some());

    store.set_session(alice(), "tok".to_owned());
    let snap = store.snapshot();
    assert_eq!(snap.user.is_some(), snap.access_token.is_some());

    store.clear_session();
    let snap = store.snapshot();
    assert_eq!(snap.user.is_some(), snap.access_token.is_some());
}

#[test]
fn clear_session_is_idempotent() {
    let store = store();
    store.set_session(alice(), "tok".to_owned());
    store.clear_session();
    store.clear_session();
    assert!(!store.snapshot().is_authenticated());
}

// =============================================================
// Durability
// =============================================================

#[test]
fn session_survives_restart_through_persistence() {
    let persist = Arc::new(MemoryPersist::default());
    let store = SessionStore::restore(Arc::clone(&persist) as Arc<dyn SessionPersist + Send + Sync>);
    store.set_session(alice(), "tok".to_owned());

    let revived = SessionStore::restore(persist);
    let snap = revived.snapshot();
    assert_eq!(snap.access_token.as_deref(), Some("tok"));
    assert_eq!(snap.user.map(|u| u.id), Some("u-1".to_owned()));
}

#[test]
fn clear_wipes_persisted_session() {
    let persist = Arc::new(MemoryPersist::default());
    let store = SessionStore::restore(Arc::clone(&persist) as Arc<dyn SessionPersist + Send + Sync>);
    store.set_session(alice(), "tok".to_owned());
    store.clear_session();

    assert!(persist.load().is_none());
    assert!(!SessionStore::restore(persist).snapshot().is_authenticated());
}

#[test]
fn corrupt_persisted_blob_is_discarded() {
    let persist = Arc::new(MemoryPersist::default());
    persist.save("not json");
    let store = SessionStore::restore(persist);
    assert!(!store.snapshot().is_authenticated());
}

#[test]
fn half_session_violating_invariant_is_discarded() {
    let persist = Arc::new(MemoryPersist::default());
    persist.save(r#"{"user":null,"accessToken":"orphan"}"#);
    let store = SessionStore::restore(persist);
    assert!(store.snapshot().access_token.is_none());
}

// =============================================================
// Change listener
// =============================================================

#[test]
fn listener_observes_every_mutation() {
    use std::sync::Mutex;

    let store = store();
    let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
    let sink = Arc::clone(&seen);
    store.on_change(move |s| sink.lock().unwrap().push(s.is_authenticated()));

    store.set_session(alice(), "tok".to_owned());
    store.clear_session();

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
}

// =============================================================
// Identity roles
// =============================================================

#[test]
fn roles_are_set_valued_not_exclusive() {
    let user = alice();
    assert!(user.has_role(Role::Member));
    assert!(user.has_role(Role::Organizer));
    assert!(!user.has_role(Role::Admin));
    assert!(!user.has_role(Role::Speaker));
}

#[test]
fn identity_decodes_backend_role_field() {
    let user: Identity = serde_json::from_str(
        r#"{"id":"u-2","username":"bo","email":"bo@example.com","role":["admin"]}"#,
    )
    .expect("identity");
    assert!(user.has_role(Role::Admin));
}
