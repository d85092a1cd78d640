// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod indicators;
pub mod theme;

use components::pico::Container;
use indicators::chain_indicators::ChainIndicators;
use theme::ThemeMode;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let layout_css = r#"
    * { box-sizing: border-box; }

    body {
        margin: 0;
        padding: 0;
        background-color: var(--pico-background-color);
    }

    .homepage {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 2rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.cyan.min.css",
        }
        style {
            "{layout_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let config_future = use_server_future(move || async move { api::homepage_config().await })?;

    // Read from the future to ensure it's polled during SSR.
    let body = match &*config_future.read() {
        Some(Ok(config)) => {
            rsx! {
                Homepage {
                    config: config.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// The homepage shell: provides the theme mode and mounts the widget.
#[component]
fn Homepage(config: api::homepage_config::HomepageConfig) -> Element {
    let theme_mode = use_signal(ThemeMode::default);
    use_context_provider(|| theme_mode);

    rsx! {
        div {
            "data-theme": theme_mode.read().attr(),
            Container {
                div {
                    class: "homepage",
                    ChainIndicators {
                        config,
                    }
                }
            }
        }
    }
}
