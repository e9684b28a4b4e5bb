//! Memory palace viewer page — placeholder for the interactive viewer.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::guard::RequireSession;

/// Palace viewer page for `/palace/:id`; protected.
#[component]
pub fn PalacePage() -> impl IntoView {
    view! {
        <RequireSession>
            <PalaceViewer/>
        </RequireSession>
    }
}

/// Reads the palace ID from the route and frames the future viewer area.
#[component]
fn PalaceViewer() -> impl IntoView {
    let params = use_params_map();
    let palace_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="palace-page">
            <header class="palace-page__header">
                <a class="btn" href="/dashboard">"Back to Dashboard"</a>
                <h1>{move || format!("Memory Palace #{}", palace_id())}</h1>
            </header>

            <section class="palace-page__viewer">
                <h2>"Memory Palace Viewer"</h2>
                <p>
                    "This is where the interactive memory palace interface would be displayed."
                </p>
                <ul class="palace-page__features">
                    <li>"3D or 2D visualization of rooms"</li>
                    <li>"Drag and drop memory items"</li>
                    <li>"Room navigation"</li>
                    <li>"Memory item creation and editing"</li>
                    <li>"AI-powered suggestions"</li>
                </ul>
            </section>
        </div>
    }
}
