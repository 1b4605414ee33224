use super::*;
use crate::state::session::Identity;

fn session_with_roles(roles: Vec<Role>) -> Session {
    Session {
        user: Some(Identity {
            id: "u-1".to_owned(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            roles,
        }),
        access_token: Some("tok".to_owned()),
    }
}

// =============================================================
// Logged out
// =============================================================

#[test]
fn every_tier_redirects_to_login_without_a_session() {
    let session = Session::default();
    for tier in [RouteTier::Authenticated, RouteTier::Organizer, RouteTier::Admin] {
        assert_eq!(evaluate(tier, &session), AccessDecision::ToLogin);
    }
}

// =============================================================
// Authenticated tier
// =============================================================

#[test]
fn any_identity_passes_the_authenticated_tier() {
    let session = session_with_roles(vec![Role::Member]);
    assert!(evaluate(RouteTier::Authenticated, &session).is_allowed());
}

// =============================================================
// Organizer tier
// =============================================================

#[test]
fn organizer_role_passes_the_organizer_tier() {
    let session = session_with_roles(vec![Role::Member, Role::Organizer]);
    assert!(evaluate(RouteTier::Organizer, &session).is_allowed());
}

#[test]
fn non_organizer_is_sent_home() {
    let session = session_with_roles(vec![Role::Member, Role::Speaker]);
    assert_eq!(evaluate(RouteTier::Organizer, &session), AccessDecision::ToHome);
}

// =============================================================
// Admin tier
// =============================================================

#[test]
fn admin_role_passes_the_admin_tier() {
    let session = session_with_roles(vec![Role::Admin]);
    assert!(evaluate(RouteTier::Admin, &session).is_allowed());
}

#[test]
fn non_admin_is_sent_to_login() {
    let session = session_with_roles(vec![Role::Member, Role::Organizer]);
    assert_eq!(evaluate(RouteTier::Admin, &session), AccessDecision::ToLogin);
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn redirect_targets_match_tier_rules() {
    assert_eq!(AccessDecision::Allow.redirect(), None);
    assert_eq!(AccessDecision::ToLogin.redirect(), Some("/login"));
    assert_eq!(AccessDecision::ToHome.redirect(), Some("/"));
}
