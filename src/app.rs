//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, palace::PalacePage, register::RegisterPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off the one-time startup
/// verification, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the persisted token to a session exactly once per page load.
    // Server-rendered output stays on the neutral `Initializing` branch.
    #[cfg(feature = "hydrate")]
    {
        let manager = crate::state::session::SessionManager::browser(session);
        leptos::task::spawn_local(async move { manager.init().await });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/palace-client.css"/>
        <Title text="AI Memory Palace"/>

        <Router>
            <Navbar/>
            <main class="app__content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path="/dashboard"/> }
                    />
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("palace"), ParamSegment("id"))
                        view=PalacePage
                    />
                </Routes>
            </main>
        </Router>
    }
}
