//! Composite login form: fields, submit button, and the failure message.

use leptos::prelude::*;

use crate::components::login_button::LoginButton;
use crate::components::text_field::{PasswordField, UsernameField};
use crate::state::login::LoginFormState;

#[component]
pub fn LoginUserInput() -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(LoginFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::transport::BrowserTransport;
            let result = crate::net::api::login(&transport, &request.username, &request.password).await;
            form.update(|f| f.finish_submit(&result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <UsernameField on:input=move |ev: leptos::ev::Event| {
                form.update(|f| f.username = event_target_value(&ev));
            }/>
            <PasswordField on:input=move |ev: leptos::ev::Event| {
                form.update(|f| f.password = event_target_value(&ev));
            }/>
            <LoginButton
                disabled=Signal::derive(move || form.with(LoginFormState::submit_disabled))
                loading=Signal::derive(move || form.with(|f| f.logging_in))
            />
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="login-message login-message--error" role="alert">
                    {move || form.with(|f| f.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}
