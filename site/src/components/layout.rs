//! Page structure: theme scope, section container, divider, parallax layer.

use leptos::prelude::*;

use super::class_list;
use crate::theme::Theme;

/// Publishes `theme` to everything inside it.
///
/// The tokens become `--theme-*` custom properties on the scope element, see
/// [`Theme::css_variables`].
#[component]
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    let class = format!("theme-scope theme-{}", theme.name.as_str());
    let style = theme.css_variables();

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Horizontally centered, width-capped content column.
#[component]
pub fn PageSectionContainer(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = class_list([("section-container", true), (class.as_str(), true)]);

    view! { <div class=class>{children()}</div> }
}

/// Thin rule between page sections.
#[component]
pub fn SectionDivider() -> impl IntoView {
    view! { <hr class="section-divider" /> }
}

/// Layer that drifts with the scroll position; `speed` is in tenths of the
/// scroll offset.
#[component]
pub fn ParallaxWrapper(speed: i32, children: Children) -> impl IntoView {
    view! {
        <div class="parallax" data-parallax-speed=speed.to_string()>
            {children()}
        </div>
    }
}
