//! Top navigation bar with session-dependent links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionManager, SessionState, SessionStatus};

/// Application bar: brand link plus login/register or dashboard/logout,
/// depending on where the session stands. Renders only the brand while
/// the session is still resolving.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |_| {
        SessionManager::browser(session).logout();
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"AI Memory Palace"</a>
            <div class="navbar__links">
                {move || match session.get().status() {
                    SessionStatus::Authenticated => {
                        let username = session
                            .get()
                            .user()
                            .map(|u| u.username.clone())
                            .unwrap_or_default();
                        view! {
                            <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                            <button
                                class="navbar__link navbar__logout"
                                on:click=move |_| on_logout.run(())
                            >
                                {format!("Logout ({username})")}
                            </button>
                        }
                        .into_any()
                    }
                    SessionStatus::Anonymous => view! {
                        <a class="navbar__link" href="/login">"Login"</a>
                        <a class="navbar__link" href="/register">"Register"</a>
                    }
                    .into_any(),
                    SessionStatus::Initializing => ().into_any(),
                }}
            </div>
        </nav>
    }
}
