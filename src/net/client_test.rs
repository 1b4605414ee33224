use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::state::session::{Identity, MemoryPersist, Role, SessionStore};

// =============================================================
// Fixtures
// =============================================================

struct Sent {
    method: Method,
    path: String,
    bearer: Option<String>,
}

enum Step {
    Respond(u16, &'static str),
    Fail(&'static str),
}

/// Transport that replays a script and records every outgoing call.
struct FakeTransport {
    script: RefCell<VecDeque<Step>>,
    log: Rc<RefCell<Vec<Sent>>>,
}

impl Transport for FakeTransport {
    async fn send(&self, req: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, String> {
        self.log.borrow_mut().push(Sent {
            method: req.method,
            path: req.path.clone(),
            bearer: bearer.map(ToOwned::to_owned),
        });

        match self.script.borrow_mut().pop_front().expect("script exhausted") {
            Step::Respond(status, body) => Ok(ApiResponse {
                status,
                body: body.to_owned(),
            }),
            Step::Fail(err) => Err(err.to_owned()),
        }
    }
}

struct Harness {
    api: ApiClient<FakeTransport>,
    log: Rc<RefCell<Vec<Sent>>>,
    toasts: Arc<Mutex<Vec<String>>>,
    login_redirects: Arc<Mutex<u32>>,
}

fn harness(script: Vec<Step>) -> Harness {
    let log = Rc::new(RefCell::new(Vec::new()));
    let transport = FakeTransport {
        script: RefCell::new(script.into()),
        log: Rc::clone(&log),
    };

    let toasts: Arc<Mutex<Vec<String>>> = Arc::default();
    let login_redirects: Arc<Mutex<u32>> = Arc::default();
    let toast_sink = Arc::clone(&toasts);
    let redirect_sink = Arc::clone(&login_redirects);

    let hooks = GatewayHooks {
        notify: Arc::new(move |_, message| toast_sink.lock().unwrap().push(message.to_owned())),
        goto_login: Arc::new(move || *redirect_sink.lock().unwrap() += 1),
    };

    let session = SessionStore::restore(Arc::new(MemoryPersist::default()));
    Harness {
        api: ApiClient::new(transport, session, hooks),
        log,
        toasts,
        login_redirects,
    }
}

fn alice() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        roles: vec![Role::Member],
    }
}

const PROFILE_OK: &str = r#"{"data":{"username":"alice","email":"alice@example.com"}}"#;
const REFRESH_OK: &str = r#"{"data":{"accessToken":"tok-new"}}"#;

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn attaches_bearer_token_from_live_session() {
    let h = harness(vec![Step::Respond(200, PROFILE_OK)]);
    h.api.session().set_session(alice(), "tok-1".to_owned());

    block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE))).expect("profile");

    let log = h.log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, Method::Get);
    assert_eq!(log[0].bearer.as_deref(), Some("tok-1"));
}

#[test]
fn sends_unauthenticated_without_a_session() {
    let h = harness(vec![Step::Respond(200, r#"{"data":[]}"#)]);

    block_on(h.api.dispatch(ApiRequest::get(paths::EVENTS_TRENDING))).expect("trending");

    assert_eq!(h.log.borrow()[0].bearer, None);
}

#[test]
fn success_leaves_session_untouched() {
    let h = harness(vec![Step::Respond(200, PROFILE_OK)]);
    h.api.session().set_session(alice(), "tok-1".to_owned());

    block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE))).expect("profile");

    assert_eq!(h.api.session().token().as_deref(), Some("tok-1"));
    assert!(h.toasts.lock().unwrap().is_empty());
    assert_eq!(*h.login_redirects.lock().unwrap(), 0);
}

// =============================================================
// Refresh protocol
// =============================================================

#[test]
fn single_401_refreshes_once_and_redispatches_with_new_token() {
    let h = harness(vec![
        Step::Respond(401, "{}"),
        Step::Respond(200, REFRESH_OK),
        Step::Respond(200, PROFILE_OK),
    ]);
    h.api.session().set_session(alice(), "tok-old".to_owned());

    let resp =
        block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE))).expect("recovered");
    assert!(resp.is_success());

    let log = h.log.borrow();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].path, paths::USERS_PROFILE);
    assert_eq!(log[0].bearer.as_deref(), Some("tok-old"));
    assert_eq!(log[1].path, paths::USERS_REFRESH_TOKEN);
    assert_eq!(log[1].bearer, None);
    assert_eq!(log[2].path, paths::USERS_PROFILE);
    assert_eq!(log[2].bearer.as_deref(), Some("tok-new"));

    // Identity survives; only the token rotated. No toast for the caller.
    let snap = h.api.session().snapshot();
    assert_eq!(snap.access_token.as_deref(), Some("tok-new"));
    assert_eq!(snap.user.map(|u| u.username), Some("alice".to_owned()));
    assert!(h.toasts.lock().unwrap().is_empty());
}

#[test]
fn second_401_rejects_without_another_refresh() {
    let h = harness(vec![
        Step::Respond(401, "{}"),
        Step::Respond(200, REFRESH_OK),
        Step::Respond(401, r#"{"message":"still expired"}"#),
    ]);
    h.api.session().set_session(alice(), "tok-old".to_owned());

    let err = block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE)))
        .expect_err("must reject");
    assert!(matches!(err, ApiError::Status { status: 401, .. }));

    // Exactly one refresh in the log, and the error was surfaced.
    let refreshes = h
        .log
        .borrow()
        .iter()
        .filter(|s| s.path == paths::USERS_REFRESH_TOKEN)
        .count();
    assert_eq!(refreshes, 1);
    assert_eq!(h.toasts.lock().unwrap().as_slice(), ["still expired"]);
}

#[test]
fn refresh_failure_clears_session_and_forces_login() {
    let h = harness(vec![
        Step::Respond(401, "{}"),
        Step::Respond(401, r#"{"message":"refresh denied"}"#),
    ]);
    h.api.session().set_session(alice(), "tok-old".to_owned());

    let err = block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE)))
        .expect_err("must reject");
    assert!(matches!(err, ApiError::SessionExpired));

    assert!(!h.api.session().snapshot().is_authenticated());
    assert_eq!(*h.login_redirects.lock().unwrap(), 1);
    assert_eq!(h.log.borrow().len(), 2);
}

#[test]
fn a_401_without_a_stored_identity_is_unrecoverable() {
    let h = harness(vec![Step::Respond(401, "{}")]);

    let err = block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE)))
        .expect_err("must reject");
    assert!(matches!(err, ApiError::SessionExpired));

    // No refresh was even attempted.
    assert_eq!(h.log.borrow().len(), 1);
    assert_eq!(*h.login_redirects.lock().unwrap(), 1);
}

// =============================================================
// Logout special case
// =============================================================

#[test]
fn failing_logout_ends_the_session_without_refresh() {
    let h = harness(vec![Step::Respond(500, r#"{"message":"boom"}"#)]);
    h.api.session().set_session(alice(), "tok-1".to_owned());

    let err = block_on(h.api.dispatch(ApiRequest::post(paths::USERS_LOGOUT)))
        .expect_err("must reject");
    assert!(matches!(err, ApiError::Status { status: 500, .. }));

    assert!(!h.api.session().snapshot().is_authenticated());
    assert_eq!(*h.login_redirects.lock().unwrap(), 1);
    assert_eq!(h.log.borrow().len(), 1);
    assert!(h.toasts.lock().unwrap().is_empty());
}

#[test]
fn logout_401_skips_the_refresh_protocol() {
    let h = harness(vec![Step::Respond(401, "{}")]);
    h.api.session().set_session(alice(), "tok-1".to_owned());

    block_on(h.api.dispatch(ApiRequest::post(paths::USERS_LOGOUT))).expect_err("must reject");

    assert_eq!(h.log.borrow().len(), 1);
    assert!(!h.api.session().snapshot().is_authenticated());
}

// =============================================================
// Error surfacing
// =============================================================

#[test]
fn backend_message_becomes_the_toast_and_the_error() {
    let h = harness(vec![Step::Respond(422, r#"{"message":"Name taken"}"#)]);

    let err = block_on(h.api.dispatch(ApiRequest::post(paths::USERS_REGISTER)))
        .expect_err("must reject");
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Name taken");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(h.toasts.lock().unwrap().as_slice(), ["Name taken"]);
}

#[test]
fn missing_backend_message_falls_back_to_generic() {
    let h = harness(vec![Step::Respond(500, "oops, not json")]);

    block_on(h.api.dispatch(ApiRequest::get(paths::EVENTS_TRENDING))).expect_err("must reject");

    assert_eq!(h.toasts.lock().unwrap().as_slice(), [FALLBACK_MESSAGE]);
}

#[test]
fn silent_requests_never_toast() {
    let h = harness(vec![Step::Respond(404, r#"{"message":"gone"}"#)]);

    block_on(
        h.api
            .dispatch(ApiRequest::get("/api/events/e-404").silent()),
    )
    .expect_err("must reject");

    assert!(h.toasts.lock().unwrap().is_empty());
}

#[test]
fn transport_failure_surfaces_generically() {
    let h = harness(vec![Step::Fail("connection refused")]);

    let err = block_on(h.api.dispatch(ApiRequest::get(paths::EVENTS_TRENDING)))
        .expect_err("must reject");
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(h.toasts.lock().unwrap().as_slice(), [FALLBACK_MESSAGE]);
}

// =============================================================
// End-to-end login scenario
// =============================================================

#[test]
fn login_populates_the_store_and_later_calls_carry_the_token() {
    let h = harness(vec![
        Step::Respond(
            200,
            r#"{"data":{"user":{"id":"u-1","username":"alice","email":"alice@example.com","role":["member","organizer"]},"accessToken":"tok-login"}}"#,
        ),
        Step::Respond(200, PROFILE_OK),
    ]);

    let user = block_on(crate::net::api::auth::login(&h.api, "alice", "secret"))
        .expect("login");
    assert_eq!(user.username, "alice");
    assert!(user.has_role(Role::Organizer));

    block_on(h.api.dispatch(ApiRequest::get(paths::USERS_PROFILE))).expect("profile");

    let log = h.log.borrow();
    assert_eq!(log[0].bearer, None);
    assert_eq!(log[1].bearer.as_deref(), Some("tok-login"));
}

// =============================================================
// Response helpers
// =============================================================

#[test]
fn error_message_extraction_requires_a_string_field() {
    let with = ApiResponse {
        status: 400,
        body: r#"{"message":"bad"}"#.to_owned(),
    };
    assert_eq!(with.error_message().as_deref(), Some("bad"));

    let without = ApiResponse {
        status: 400,
        body: r#"{"message":42}"#.to_owned(),
    };
    assert_eq!(without.error_message(), None);
}

#[test]
fn status_classification_covers_the_2xx_range() {
    let ok = ApiResponse {
        status: 204,
        body: String::new(),
    };
    assert!(ok.is_success());

    let redirect = ApiResponse {
        status: 302,
        body: String::new(),
    };
    assert!(!redirect.is_success());
}
