//! Top application bar with the dark mode toggle.
//!
//! The toggle renders one glyph per mode and the stylesheet shows the one
//! matching `data-theme`, so server HTML stays correct whichever mode the
//! browser resolves before hydrating.

#[cfg(test)]
#[path = "app_bar_test.rs"]
mod app_bar_test;

use leptos::prelude::*;

use crate::util::theme::{self, ThemeMode};

/// Title bar shown above every route.
#[component]
pub fn AppBar() -> impl IntoView {
    view! {
        <header class="app-bar">
            <span class="app-bar__title">"Login"</span>
            <span class="app-bar__spacer"></span>
            <button
                class="btn app-bar__theme-toggle"
                on:click=move |_| {
                    theme::toggle();
                }
                title="Toggle dark mode"
            >
                {theme_icons()
                    .into_iter()
                    .map(|(class, glyph)| view! { <span class=class aria-hidden="true">{glyph}</span> })
                    .collect_view()}
            </button>
        </header>
    }
}

/// Toggle glyphs for every mode, with the class the stylesheet keys on.
fn theme_icons() -> [(&'static str, &'static str); 2] {
    [ThemeMode::Light, ThemeMode::Dark].map(|mode| (theme_icon_class(mode), mode.toggle_icon()))
}

fn theme_icon_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "app-bar__icon app-bar__icon--light",
        ThemeMode::Dark => "app-bar__icon app-bar__icon--dark",
    }
}
