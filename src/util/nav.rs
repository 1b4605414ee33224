//! Hard browser navigation, outside the router.

/// Force navigation to the login entry point.
///
/// Used on unrecoverable session loss; a full location change (rather than
/// a router transition) guarantees all in-memory state is rebuilt from the
/// now-empty session.
pub fn force_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
