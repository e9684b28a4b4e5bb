//! Dashboard page listing memory palaces with a create dialog.

#![allow(clippy::unused_async)]

use leptos::prelude::*;

use crate::components::guard::RequireSession;
use crate::components::palace_card::PalaceCard;
use crate::net::types::MemoryPalace;
use crate::state::session::SessionState;

/// Dashboard page; protected, so anonymous visitors never see it.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <PalaceList/>
        </RequireSession>
    }
}

/// Welcome header, palace grid, and the create-palace dialog.
#[component]
fn PalaceList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Palace list resource — fetches on mount.
    let palaces = LocalResource::new(move || fetch_palaces(session));

    // Create-palace dialog state.
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    let on_create = move |_| {
        show_create.set(true);
        new_title.set(String::new());
        new_description.set(String::new());
    };

    let on_cancel = Callback::new(move |_| show_create.set(false));

    let welcome = move || {
        let username = session
            .get()
            .user()
            .map(|u| u.username.clone())
            .unwrap_or_default();
        format!("Welcome back, {username}!")
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{welcome}</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Palace"
                </button>
            </header>

            <h2>"Your Memory Palaces"</h2>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading memory palaces..."</p> }>
                    {move || {
                        palaces
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <div class="dashboard-page__empty">
                                            <p class="dashboard-page__empty-title">
                                                "No memory palaces yet"
                                            </p>
                                            <p class="dashboard-page__hint">
                                                "Create your first memory palace to start organizing your knowledge"
                                            </p>
                                            <button class="btn btn--primary" on:click=on_create>
                                                "Create Your First Palace"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|palace| view! { <PalaceCard palace=palace/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreatePalaceDialog
                    title=new_title
                    description=new_description
                    on_cancel=on_cancel
                    palaces=palaces
                />
            </Show>
        </div>
    }
}

/// Fetch the palace list through the authenticated gateway. Failures render
/// as an empty list; an expired token is already handled by the gateway's
/// collapse policy before this sees the error.
async fn fetch_palaces(session: RwSignal<SessionState>) -> Vec<MemoryPalace> {
    #[cfg(feature = "hydrate")]
    {
        let manager = crate::state::session::SessionManager::browser(session);
        match crate::net::api::fetch_palaces(manager.gateway()).await {
            Ok(list) => list,
            Err(e) => {
                leptos::logging::warn!("failed to load memory palaces: {e}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Vec::new()
    }
}

/// Modal dialog for creating a new memory palace.
#[component]
fn CreatePalaceDialog(
    title: RwSignal<String>,
    description: RwSignal<String>,
    on_cancel: Callback<()>,
    palaces: LocalResource<Vec<MemoryPalace>>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session =
        expect_context::<RwSignal<crate::state::session::SessionState>>();

    let submit = Callback::new(move |_| {
        let palace_title = title.get();
        if palace_title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let palace_title = palace_title.trim().to_owned();
            let palace_description = description.get().trim().to_owned();
            let palaces = palaces.clone();
            leptos::task::spawn_local(async move {
                let manager = crate::state::session::SessionManager::browser(session);
                match crate::net::api::create_palace(
                    manager.gateway(),
                    &palace_title,
                    &palace_description,
                )
                .await
                {
                    Ok(_) => {
                        palaces.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => leptos::logging::warn!("failed to create memory palace: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (palace_title, &palaces);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Memory Palace"</h2>
                <label class="dialog__label">
                    "Palace Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description (optional)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create Palace"
                    </button>
                </div>
            </div>
        </div>
    }
}
