//! View gates enforcing the session state machine on routes.
//!
//! Both gates render a neutral waiting line while the session is still
//! resolving, so neither branch ever flashes for a user who is about to
//! be redirected.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStatus};

/// Renders children only for an authenticated session; anonymous visitors
/// are sent to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect once the session resolves anonymous.
    Effect::new(move || {
        if session.get().status() == SessionStatus::Anonymous {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        {move || match session.get().status() {
            SessionStatus::Initializing => {
                view! { <p class="gate__waiting">"Loading..."</p> }.into_any()
            }
            SessionStatus::Authenticated => children(),
            SessionStatus::Anonymous => ().into_any(),
        }}
    }
}

/// Renders children only while anonymous (the entry forms); authenticated
/// users are sent to their dashboard.
#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().status() == SessionStatus::Authenticated {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        {move || match session.get().status() {
            SessionStatus::Initializing => {
                view! { <p class="gate__waiting">"Loading..."</p> }.into_any()
            }
            SessionStatus::Anonymous => children(),
            SessionStatus::Authenticated => ().into_any(),
        }}
    }
}
