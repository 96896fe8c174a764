//! Brand mark.

use leptos::prelude::*;

use super::class_list;

/// Number of accent colors defined for the logo in the site CSS.
const ACCENTS: usize = 3;

/// The two-stroke brand mark, colored by one of the accent palettes.
///
/// `accent` 0 follows the theme text color; 1..=3 pick a fixed accent.
/// Larger values wrap around.
#[component]
pub fn BrandLogo(
    #[prop(optional)] accent: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let accent_class = accent_class(accent);
    let class = class_list([
        ("brand-logo", true),
        (accent_class.as_str(), true),
        (class.as_str(), true),
    ]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 100 100"
            fill="currentColor"
            class=class
            role="img"
            aria-label="Alephium"
        >
            <path d="M12,92 L34,92 L60,8 L38,8 Z"></path>
            <path d="M48,92 L70,92 L96,8 L74,8 Z"></path>
        </svg>
    }
}

fn accent_class(accent: usize) -> String {
    match accent {
        0 => String::new(),
        n => format!("brand-logo--{}", (n - 1) % ACCENTS + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn accent_wraps_around_palette() {
        assert_eq!(accent_class(0), "");
        assert_eq!(accent_class(2), "brand-logo--2");
        assert_eq!(accent_class(4), "brand-logo--1");
    }

    #[test]
    fn renders_labelled_mark() {
        let html = view! { <BrandLogo accent=2 class="landing-logo" /> }.to_html();

        assert!(html.contains("brand-logo brand-logo--2 landing-logo"));
        assert!(html.contains("aria-label=\"Alephium\""));
    }
}
