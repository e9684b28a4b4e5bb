//! Registration page — public-only credential form.

use leptos::prelude::*;

use crate::components::guard::RequireAnonymous;
use crate::util::validate;

/// Registration page; redirects to the dashboard when already
/// authenticated. Success logs the new account straight in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <RequireAnonymous>
            <RegisterForm/>
        </RequireAnonymous>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session =
        expect_context::<RwSignal<crate::state::session::SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();

        if let Err(message) =
            validate::register_input(&username_value, &email_value, &password_value)
        {
            error.set(Some(message.to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            error.set(None);
            busy.set(true);
            leptos::task::spawn_local(async move {
                let manager = crate::state::session::SessionManager::browser(session);
                let result = manager
                    .register(username_value.trim(), email_value.trim(), &password_value)
                    .await;
                busy.set(false);
                match result {
                    Ok(()) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>

                {move || {
                    error.get().map(|message| view! { <p class="auth-card__error">{message}</p> })
                }}

                <label class="auth-card__label">
                    "Username"
                    <input
                        class="auth-card__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>

                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
