//! Grid card: text, call to action and an optional illustration.

use leptos::prelude::*;

use super::{class_list, ArrowedLink, Card, HeadingLevel, TextSnippet};
use crate::types::LinkDescriptor;

/// Card used in feature grids.
///
/// Absent optional props simply omit their element: no `image` means no
/// illustration, no `background_image_url` means a flat background.
#[component]
pub fn GridCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    link: LinkDescriptor,
    #[prop(optional, into)] class: String,
    /// Background color; defaults to the theme's primary background
    #[prop(optional, into)]
    bg_color: Option<String>,
    /// Cover image drawn behind the card content
    #[prop(optional, into)]
    background_image_url: Option<String>,
    /// Illustration shown beside the text
    #[prop(optional, into)]
    image: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = class_list([("grid-card", true), (class.as_str(), true)]);
    let bg_color = bg_color.unwrap_or_else(|| "var(--theme-bg-primary)".to_string());
    let style = background_image_url
        .map(|url| background_image_style(&url))
        .unwrap_or_default();

    view! {
        <Card class=class bg_color=bg_color style=style>
            <div class="grid-card__contents">
                <article>
                    {card_text(title, subtitle, children)}
                    <ArrowedLink link=link />
                </article>
                {image.map(|image| image.run())}
            </div>
        </Card>
    }
}

fn card_text(title: String, subtitle: String, children: Option<Children>) -> AnyView {
    let class = class_list([
        ("grid-card__text", true),
        ("grid-card__text--no-subtitle", subtitle.is_empty()),
    ]);
    match children {
        Some(children) => view! {
            <TextSnippet
                class=class
                title=title
                title_level=HeadingLevel::H3
                subtitle=subtitle
                big_subtitle=true
                big_text=true
            >
                {children()}
            </TextSnippet>
        }
        .into_any(),
        None => view! {
            <TextSnippet
                class=class
                title=title
                title_level=HeadingLevel::H3
                subtitle=subtitle
                big_subtitle=true
                big_text=true
            />
        }
        .into_any(),
    }
}

fn background_image_style(url: &str) -> String {
    format!(
        "background-image: url('{}'); background-repeat: no-repeat; background-position: center top; background-size: cover;",
        url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn link() -> LinkDescriptor {
        LinkDescriptor::new("/wallets", "Get a wallet")
    }

    #[test]
    fn renders_text_and_link() {
        let html = view! {
            <GridCard title="Wallets" subtitle="Desktop and mobile" link=link() />
        }
        .to_html();

        assert!(html.contains("<h3>Wallets</h3>"));
        assert!(html.contains("Desktop and mobile"));
        assert!(html.contains("href=\"/wallets\""));
        assert!(html.contains("Get a wallet"));
        assert!(!html.contains("text-snippet__body"));
    }

    #[test]
    fn missing_subtitle_marks_text_block() {
        let bare = view! { <GridCard title="Wallets" subtitle="" link=link() /> }.to_html();
        let full = view! { <GridCard title="Wallets" subtitle="Desktop" link=link() /> }.to_html();

        assert!(bare.contains("grid-card__text grid-card__text--no-subtitle"));
        assert!(!full.contains("grid-card__text--no-subtitle"));
    }

    #[test]
    fn no_image_component_renders_no_image() {
        let html = view! {
            <GridCard title="Wallets" subtitle="Desktop and mobile" link=link() />
        }
        .to_html();

        assert!(!html.contains("<img"));
        assert!(!html.contains("background-image"));
    }

    #[test]
    fn image_component_is_rendered_beside_text() {
        let html = view! {
            <GridCard
                title="Wallets"
                subtitle="Desktop and mobile"
                link=link()
                image=|| view! { <img class="card-illustration" src="/images/wallet.svg" alt="" /> }
            />
        }
        .to_html();

        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains("card-illustration"));
    }

    #[test]
    fn bg_color_overrides_theme_default() {
        let themed = view! { <GridCard title="A" subtitle="B" link=link() /> }.to_html();
        let white = view! { <GridCard title="A" subtitle="B" link=link() bg_color="#fff" /> }.to_html();

        assert!(themed.contains("background-color: var(--theme-bg-primary);"));
        assert!(white.contains("background-color: #fff;"));
        assert!(!white.contains("var(--theme-bg-primary)"));
    }

    #[test]
    fn background_image_is_drawn_as_cover() {
        let html = view! {
            <GridCard title="A" subtitle="B" link=link() background_image_url="/images/lake.jpg" />
        }
        .to_html();

        assert!(html.contains("background-image: url('/images/lake.jpg');"));
        assert!(html.contains("background-size: cover;"));
    }

    #[test]
    fn children_extend_the_text_block() {
        let html = view! {
            <GridCard title="Prerequisites" subtitle="Some experience" link=link()>
                <ul class="skills"><li>"Rust"</li></ul>
            </GridCard>
        }
        .to_html();

        assert!(html.contains("text-snippet__body"));
        assert!(html.contains("<li>Rust</li>"));
    }
}
