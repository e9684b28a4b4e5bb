//! Session state machine and its owning manager.
//!
//! The session of this running client instance is held in one
//! `RwSignal<SessionState>` provided via context. [`SessionManager`] is
//! its sole writer: it drives the one-time startup verification and the
//! login/register/logout operations. The gateway participates indirectly
//! through [`SessionManager::unauthorized_hook`], which demotes the
//! session when a bearer token is rejected mid-flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::gateway::{BrowserTransport, Gateway, GatewayError, api_base_url};
use crate::net::token_store::{BrowserTokenStore, TokenStore};
use crate::net::types::{AuthPayload, User};

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The one-time startup verification has not resolved yet.
    #[default]
    Initializing,
    Anonymous,
    Authenticated,
}

/// The authenticated-or-anonymous state of the current user.
///
/// Fields are private so every reachable state upholds the invariant:
/// a user identity is present exactly when the status is `Authenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<User>,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_initializing(&self) -> bool {
        self.status == SessionStatus::Initializing
    }

    /// Resolve to an anonymous session, dropping any identity.
    pub fn resolve_anonymous(&mut self) {
        self.status = SessionStatus::Anonymous;
        self.user = None;
    }

    /// Resolve to an authenticated session for `user`.
    pub fn resolve_authenticated(&mut self, user: User) {
        self.status = SessionStatus::Authenticated;
        self.user = Some(user);
    }

    /// Forced collapse: demote to anonymous after a rejected credential.
    pub fn collapse(&mut self) {
        self.resolve_anonymous();
    }
}

type InitFuture = Shared<LocalBoxFuture<'static, ()>>;

/// Owner of the session state machine.
///
/// Clones share the same memoized startup resolution, so any number of
/// concurrent [`SessionManager::init`] callers observe a single outcome
/// backed by at most one verify round-trip.
#[derive(Clone)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
    gateway: Gateway,
    store: Rc<dyn TokenStore>,
    init: Rc<RefCell<Option<InitFuture>>>,
}

impl SessionManager {
    pub fn new(state: RwSignal<SessionState>, gateway: Gateway) -> Self {
        let store = gateway.store();
        Self {
            state,
            gateway,
            store,
            init: Rc::new(RefCell::new(None)),
        }
    }

    /// Canonical browser wiring: `localStorage` token slot, `gloo-net`
    /// transport, and collapse-plus-redirect on a rejected credential.
    pub fn browser(state: RwSignal<SessionState>) -> Self {
        let collapse = Self::unauthorized_hook(state);
        let gateway = Gateway::new(
            api_base_url(),
            Rc::new(BrowserTransport),
            Rc::new(BrowserTokenStore),
            move || {
                collapse();
                crate::util::redirect::redirect_to_login();
            },
        );
        Self::new(state, gateway)
    }

    /// The side effect the gateway runs when a bearer token is rejected.
    /// The gateway has already emptied the token slot; this demotes the
    /// in-memory session so the next state read is `Anonymous`.
    pub fn unauthorized_hook(state: RwSignal<SessionState>) -> impl Fn() + Clone + 'static {
        move || state.update(SessionState::collapse)
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// One-time startup resolution: `Initializing` to `Anonymous` or
    /// `Authenticated`. Safe to await from any number of callers; the
    /// verify call is issued at most once per process.
    pub async fn init(&self) {
        let shared = {
            let mut slot = self.init.borrow_mut();
            slot.get_or_insert_with(|| {
                let manager = self.clone();
                async move { manager.run_init().await }.boxed_local().shared()
            })
            .clone()
        };
        shared.await;
    }

    async fn run_init(&self) {
        if self.store.get().is_none() {
            // No stored token: resolve without touching the network.
            self.state.update(SessionState::resolve_anonymous);
            return;
        }
        match api::verify(&self.gateway).await {
            Ok(user) => self.state.update(|s| s.resolve_authenticated(user)),
            Err(error) => {
                // Absence of a valid session is not a startup error; any
                // failure resolves to anonymous with the slot emptied.
                leptos::logging::warn!("token verification failed: {error}");
                self.store.clear();
                self.state.update(SessionState::resolve_anonymous);
            }
        }
    }

    /// `Anonymous` to `Authenticated`, or a typed failure that leaves the
    /// session and the token slot untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), GatewayError> {
        let payload = api::login(&self.gateway, email, password).await?;
        self.establish(payload);
        Ok(())
    }

    /// Same contract as [`SessionManager::login`] for new accounts.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), GatewayError> {
        let payload = api::register(&self.gateway, username, email, password).await?;
        self.establish(payload);
        Ok(())
    }

    /// Unconditional teardown. Cannot fail.
    pub fn logout(&self) {
        self.store.clear();
        self.state.update(SessionState::resolve_anonymous);
    }

    fn establish(&self, payload: AuthPayload) {
        // Persist before publishing so no reader observes an authenticated
        // session without a stored credential.
        self.store.set(&payload.access_token);
        self.state.update(|s| s.resolve_authenticated(payload.user));
    }
}
