//! Process-wide theme configuration with an explicit readiness flag.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! LIFECYCLE
//! =========
//! The mode starts unset. `init()` resolves and applies it; entry points call
//! it before mounting and `App` renders nothing until `is_ready()`. SSR paths
//! skip the browser calls and resolve to light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::RwLock;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "login_portal_theme";

/// Color scheme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to `data-theme` and to storage.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown strings yield `None`.
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: offers the other mode.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

static MODE: RwLock<Option<ThemeMode>> = RwLock::new(None);

/// The current mode, or `None` until [`init`] has run.
pub fn current() -> Option<ThemeMode> {
    MODE.read().ok().and_then(|guard| *guard)
}

/// Whether the theme has been initialized and views may render.
pub fn is_ready() -> bool {
    current().is_some()
}

/// Resolve the preference, apply it, and mark the theme ready.
///
/// Idempotent: a second call keeps the already-resolved mode.
pub fn init() -> ThemeMode {
    if let Some(mode) = current() {
        return mode;
    }
    let mode = read_preference();
    set(mode);
    mode
}

/// Flip the mode, apply it, and persist the new preference.
pub fn toggle() -> ThemeMode {
    let next = current().unwrap_or_default().toggled();
    set(next);
    persist(next);
    next
}

fn set(mode: ThemeMode) {
    apply(mode);
    if let Ok(mut guard) = MODE.write() {
        *guard = Some(mode);
    }
}

/// Read the stored preference, falling back to the system color scheme.
fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ThemeMode::from_attr(&val) {
                    return mode;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_attr());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

fn persist(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, mode.as_attr());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
