//! Explicit theme mode, provided as a Dioxus context by the app shell.

use dioxus::prelude::*;

/// The color mode the whole page renders in. Maps onto Pico's `data-theme`
/// attribute; components that need mode-specific surface colors read it from
/// context instead of probing the document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn attr(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Background for the widget's main surface.
    pub fn surface_color(&self) -> &'static str {
        match self {
            ThemeMode::Light => "var(--pico-card-background-color)",
            ThemeMode::Dark => "var(--pico-card-sectioning-background-color)",
        }
    }

    /// Background for the indicator list panel, one step removed from the
    /// main surface.
    pub fn panel_color(&self) -> &'static str {
        match self {
            ThemeMode::Light => "var(--pico-card-sectioning-background-color)",
            ThemeMode::Dark => "var(--pico-card-background-color)",
        }
    }
}

/// Reads the theme mode provided by the shell, defaulting to light when no
/// provider exists (e.g. a component rendered in isolation).
pub fn use_theme_mode() -> ThemeMode {
    try_consume_context::<Signal<ThemeMode>>()
        .map(|signal| *signal.read())
        .unwrap_or_default()
}
