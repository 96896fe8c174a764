//! SVG icon components using Phosphor Icons.
//!
//! Inline SVG keeps the pages free of icon font and sprite requests.
//! All icons are from the [Phosphor Icons](https://phosphoricons.com/) library.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// Icons are decorative: they are hidden from assistive technology, the
/// surrounding element carries any accessible label.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_RIGHT size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons - https://phosphoricons.com/
// =============================================================================

/// Right arrow (Regular), used by call-to-action links
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Check in a filled circle (Fill), used for completed todo items
pub const ICON_CHECK_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm45.66,85.66-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35a8,8,0,0,1,11.32,11.32Z";
