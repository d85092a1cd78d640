use api::indicator_id::IndicatorId;
use dioxus::prelude::*;

use crate::theme::use_theme_mode;
use crate::theme::ThemeMode;

#[derive(Props, Clone, PartialEq)]
pub struct ChainIndicatorItemProps {
    pub id: IndicatorId,
    pub title: &'static str,
    /// The indicator's current value, when the stats snapshot has one.
    #[props(optional)]
    pub value: Option<String>,
    pub is_selected: bool,
    pub on_select: EventHandler<IndicatorId>,
}

/// One entry in the indicator list: title plus current value, highlighted
/// when selected. Clicking it makes it the active indicator.
#[allow(non_snake_case)]
pub fn ChainIndicatorItem(props: ChainIndicatorItemProps) -> Element {
    let theme = use_theme_mode();
    let mut is_hovered = use_signal(|| false);

    let background = if props.is_selected {
        match theme {
            ThemeMode::Light => "var(--pico-primary-focus)",
            ThemeMode::Dark => "var(--pico-primary-hover-background)",
        }
    } else if is_hovered() {
        "var(--pico-secondary-focus)"
    } else {
        "transparent"
    };

    rsx! {
        li {
            style: "list-style: none;",
            a {
                href: "#",
                "aria-current": if props.is_selected { "true" } else { "false" },
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 0.125rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: var(--pico-border-radius);
                    text-decoration: none;
                    background-color: {background};
                ",
                onmouseenter: move |_| is_hovered.set(true),
                onmouseleave: move |_| is_hovered.set(false),
                onclick: move |event| {
                    event.prevent_default();
                    dioxus_logger::tracing::debug!("selecting indicator: {}", props.id);
                    props.on_select.call(props.id);
                },
                span {
                    style: "font-weight: 500;",
                    "{props.title}"
                }
                if let Some(value) = &props.value {
                    span {
                        style: "color: var(--pico-muted-color); font-size: 0.875rem;",
                        "{value}"
                    }
                }
            }
        }
    }
}
