//! Static page crediting the open-source software the portal is built on.

#[cfg(test)]
#[path = "open_source_test.rs"]
mod open_source_test;

use leptos::prelude::*;

/// One credited project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenSourceComponent {
    pub name: &'static str,
    pub license: &'static str,
    pub url: &'static str,
}

/// Projects listed on the page, alphabetical by name.
pub const OPEN_SOURCE_COMPONENTS: &[OpenSourceComponent] = &[
    OpenSourceComponent { name: "axum", license: "MIT", url: "https://github.com/tokio-rs/axum" },
    OpenSourceComponent { name: "gloo", license: "MIT OR Apache-2.0", url: "https://github.com/rustwasm/gloo" },
    OpenSourceComponent { name: "leptos", license: "MIT", url: "https://github.com/leptos-rs/leptos" },
    OpenSourceComponent { name: "serde", license: "MIT OR Apache-2.0", url: "https://github.com/serde-rs/serde" },
    OpenSourceComponent { name: "thiserror", license: "MIT OR Apache-2.0", url: "https://github.com/dtolnay/thiserror" },
    OpenSourceComponent { name: "tokio", license: "MIT", url: "https://github.com/tokio-rs/tokio" },
    OpenSourceComponent { name: "tower-http", license: "MIT", url: "https://github.com/tower-rs/tower-http" },
    OpenSourceComponent { name: "tracing", license: "MIT", url: "https://github.com/tokio-rs/tracing" },
    OpenSourceComponent { name: "wasm-bindgen", license: "MIT OR Apache-2.0", url: "https://github.com/rustwasm/wasm-bindgen" },
];

#[component]
pub fn OpenSourcePage() -> impl IntoView {
    view! {
        <div class="open-source-page">
            <h1>"Open Source"</h1>
            <p>"This portal is built with the following open-source software."</p>
            <ul class="open-source-list">
                {OPEN_SOURCE_COMPONENTS
                    .iter()
                    .map(|c| view! {
                        <li class="open-source-list__item">
                            <a href=c.url target="_blank" rel="noopener noreferrer">{c.name}</a>
                            <span class="open-source-list__license">{c.license}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
