//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct SkeletonProps {
    /// CSS width, e.g. "215px".
    width: String,
    /// CSS height, e.g. "48px".
    height: String,
}

/// A fixed-size loading placeholder. Reserves the space of the content it
/// stands in for so the layout does not jump when data arrives.
pub fn Skeleton(props: SkeletonProps) -> Element {
    rsx! {
        div {
            "aria-busy": "true",
            style: "
                width: {props.width};
                height: {props.height};
                border-radius: var(--pico-border-radius);
                background-color: var(--pico-secondary-background);
                opacity: 0.2;
            ",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InfoTipProps {
    label: String,
}

/// An inline info glyph that reveals `label` on hover, using Pico's
/// `data-tooltip` attribute.
pub fn InfoTip(props: InfoTipProps) -> Element {
    rsx! {
        span {
            "data-tooltip": "{props.label}",
            "data-placement": "top",
            style: "margin-left: 0.25rem; cursor: pointer; border-bottom: none;",
            "ⓘ"
        }
    }
}
