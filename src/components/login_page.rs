//! Login Page Component
//!
//! Credential form on the left, marketing panel on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::config::{AppConfig, PRODUCTS_PATH};
use crate::session::{GateTransition, SessionGate};

/// Leaving the login screen replaces its history entry
pub fn products_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let gate = RwSignal::new(SessionGate::new());
    // Presentation only; nothing is persisted
    let (keep_signed_in, set_keep_signed_in) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(submit) = gate.try_update(SessionGate::begin_submit) else { return };
        let credentials = match submit {
            Ok(credentials) => credentials,
            Err(e) => {
                log::warn!("submit ignored: {}", e);
                return;
            }
        };

        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api::login(&config, &credentials).await;
            let transition = gate
                .try_update(|g| g.finish_submit(outcome))
                .unwrap_or(GateTransition::Stay);
            if transition == GateTransition::NavigateToProducts {
                navigate(PRODUCTS_PATH, products_navigation());
            }
        });
    };

    let error = move || gate.with(|g| g.error().map(str::to_string));
    let pending = move || gate.with(SessionGate::is_pending);

    view! {
        <div class="login-layout">
            <div class="login-panel">
                <div class="login-logo">"Cloth Inventory"</div>
                <h2>"Login"</h2>

                {move || error().map(|msg| view! { <div class="login-error">{msg}</div> })}

                <form class="login-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter your username"
                            prop:value=move || gate.with(|g| g.credentials.user.clone())
                            on:input=move |ev| gate.update(|g| g.set_user(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || gate.with(|g| g.credentials.pass.clone())
                            on:input=move |ev| gate.update(|g| g.set_pass(event_target_value(&ev)))
                        />
                    </div>
                    <div class="login-options">
                        <label class="keep-signed-in">
                            <input
                                type="checkbox"
                                id="keep-signed-in"
                                prop:checked=keep_signed_in
                                on:change=move |ev| set_keep_signed_in.set(event_target_checked(&ev))
                            />
                            "Keep me signed in"
                        </label>
                        <a href="#" class="forgot-password">"Forgot password?"</a>
                    </div>

                    <button type="submit" class="login-btn" disabled=pending>
                        {move || if pending() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <a href="#" class="login-help">"Have trouble or need help?"</a>
            </div>

            <div class="login-hero">
                <h2>"Manage your designs for your clients in one place."</h2>
                <p>"Increased customer acquisition."</p>
            </div>
        </div>
    }
}
