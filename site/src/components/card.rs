//! Bordered card container shared by the card family.

use leptos::prelude::*;

use super::class_list;

/// Bordered, rounded container.
///
/// Background and border fall back to the theme (`--theme-bg-primary`,
/// `--theme-border-primary`) unless overridden.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    /// Background color, overriding the theme default
    #[prop(optional, into)]
    bg_color: Option<String>,
    /// Border color, overriding the theme default
    #[prop(optional, into)]
    border_color: Option<String>,
    #[prop(optional)] thick_borders: bool,
    /// Extra inline declarations appended after the color overrides
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let class = class_list([
        ("card", true),
        ("card--thick-borders", thick_borders),
        (class.as_str(), true),
    ]);
    let style = card_style(bg_color.as_deref(), border_color.as_deref(), &style);

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

fn card_style(bg_color: Option<&str>, border_color: Option<&str>, extra: &str) -> String {
    let declarations = [
        bg_color.map(|c| format!("background-color: {};", c)),
        border_color.map(|c| format!("border-color: {};", c)),
        (!extra.is_empty()).then(|| extra.to_string()),
    ];
    declarations.into_iter().flatten().collect::<Vec<_>>().join(" ")
}
