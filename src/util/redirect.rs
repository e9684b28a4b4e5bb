//! Hard navigation to the anonymous entry point.
//!
//! Used by the gateway's `401` policy, which can fire outside any
//! component scope; a raw location change does not depend on router
//! context. Requires a browser environment.

/// Force the browser back to the login page.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
