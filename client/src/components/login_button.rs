//! Submit button for the login form.

#[cfg(test)]
#[path = "login_button_test.rs"]
mod login_button_test;

use leptos::prelude::*;

/// Full-width "GO" submit button.
///
/// While `loading` the label is replaced by a spinner and the button is
/// non-interactive; `disabled` comes from the form's field check.
#[component]
pub fn LoginButton(#[prop(into)] disabled: Signal<bool>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <button
            class=move || login_button_class(loading.get())
            type="submit"
            aria-label="login-button"
            aria-busy=move || if loading.get() { "true" } else { "false" }
            disabled=move || disabled.get() || loading.get()
        >
            <Show when=move || loading.get() fallback=|| " GO ">
                <span class="login-button__spinner" aria-hidden="true"></span>
            </Show>
        </button>
    }
}

fn login_button_class(loading: bool) -> &'static str {
    if loading { "login-button login-button--loading" } else { "login-button" }
}
