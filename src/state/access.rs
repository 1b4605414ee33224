#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::session::{Role, Session};

/// The three gated navigation tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTier {
    Authenticated,
    Organizer,
    Admin,
}

/// Outcome of evaluating a tier against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    ToLogin,
    ToHome,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }

    /// Redirect target when access is denied.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::ToLogin => Some("/login"),
            Self::ToHome => Some("/"),
        }
    }
}

/// Pure, synchronous gate decision over the live session snapshot.
///
/// - Authenticated: any identity passes.
/// - Organizer: missing identity goes to login, a non-organizer goes home.
/// - Admin: anything short of an admin identity goes to login.
pub fn evaluate(tier: RouteTier, session: &Session) -> AccessDecision {
    let Some(user) = &session.user else {
        return AccessDecision::ToLogin;
    };

    match tier {
        RouteTier::Authenticated => AccessDecision::Allow,
        RouteTier::Organizer => {
            if user.has_role(Role::Organizer) {
                AccessDecision::Allow
            } else {
                AccessDecision::ToHome
            }
        }
        RouteTier::Admin => {
            if user.has_role(Role::Admin) {
                AccessDecision::Allow
            } else {
                AccessDecision::ToLogin
            }
        }
    }
}
