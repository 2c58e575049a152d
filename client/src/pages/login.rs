//! Login page: the username/password form.

use leptos::prelude::*;

use crate::components::login_user_input::LoginUserInput;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <LoginUserInput/>
        </div>
    }
}
