//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Redirect, Route, Router, Routes},
};

use crate::components::app_bar::AppBar;
use crate::pages::{login::LoginPage, open_source::OpenSourcePage};
use crate::util::theme;

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
/// Renders nothing until the theme has been initialized; both entry points
/// call `theme::init()` before mounting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ready = theme::is_ready();

    view! {
        <Stylesheet id="leptos" href="/pkg/login-portal.css"/>
        <Title text="Login"/>

        <Show when=move || ready>
            <Router>
                <AppBar/>
                <main class="page">
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=LoginPage/>
                        <Route path=StaticSegment("open-source") view=OpenSourcePage/>
                    </Routes>
                </main>
                <footer class="footer">
                    <A href="/open-source">"Open Source"</A>
                </footer>
            </Router>
        </Show>
    }
}
