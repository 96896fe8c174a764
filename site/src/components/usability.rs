//! Usability showcase: header, call to action and a screenshot grid.

use leptos::prelude::*;

use super::{Button, PageSectionContainer, ResponsiveImage, SectionTextHeader, TextSnippet};
use crate::types::UsabilityContent;
use crate::PageAssets;

/// Grid cell class for the image at zero-based `index`.
///
/// The first screenshot spans both columns; the rest fill the grid two by two.
pub fn image_cell_class(index: usize) -> &'static str {
    if index == 0 {
        "usability-image usability-image--wide"
    } else {
        "usability-image"
    }
}

/// Showcase section over decorative mountains and birds.
#[component]
pub fn PageSectionUsability(
    content: UsabilityContent,
    #[prop(optional)] assets: PageAssets,
) -> impl IntoView {
    let UsabilityContent {
        title,
        subtitle,
        description,
        button,
        images,
    } = content;

    view! {
        <section class="usability-section">
            <PageSectionContainer class="usability-container">
                <SectionTextHeader
                    class="usability-header"
                    title=title
                    subtitle=subtitle
                    centered=true
                    big_subtitle=true
                />
                <div class="usability-centered">
                    <TextSnippet class="usability-description" big_text=true>
                        <p>{description}</p>
                    </TextSnippet>
                    <Button link=button />
                </div>
                <div class="usability-images">
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| {
                            let cell = image_cell_class(index);
                            view! {
                                <div class=cell>
                                    <ResponsiveImage image=image />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </PageSectionContainer>
            <img class="usability-birds" src=assets.birds alt="" aria-hidden="true" />
            <img class="usability-mountains" src=assets.yellow_mountains alt="" aria-hidden="true" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FallbackImage, ImageDescriptor, ImageSource, LinkDescriptor};
    use leptos::tachys::view::RenderHtml;

    fn screenshot(name: &str) -> ImageDescriptor {
        ImageDescriptor {
            alt_text: name.into(),
            width: 800,
            height: 500,
            sources: vec![ImageSource {
                src_set: format!("/img/{}.webp 800w", name),
                mime_type: "image/webp".into(),
                ..Default::default()
            }],
            fallback: FallbackImage {
                src: format!("/img/{}.png", name),
                ..Default::default()
            },
        }
    }

    fn content(images: Vec<ImageDescriptor>) -> UsabilityContent {
        UsabilityContent {
            title: "Usability".into(),
            subtitle: "Built for people".into(),
            description: "Wallets and tools that stay out of the way.".into(),
            button: LinkDescriptor::new("/wallets", "Try the wallet"),
            images,
        }
    }

    #[test]
    fn first_image_spans_the_full_row() {
        assert_eq!(image_cell_class(0), "usability-image usability-image--wide");
        assert_eq!(image_cell_class(1), "usability-image");
        assert_eq!(image_cell_class(7), "usability-image");
    }

    #[test]
    fn three_images_render_one_wide_and_two_regular_cells() {
        let images = vec![screenshot("desktop"), screenshot("mobile"), screenshot("extension")];
        let html = view! { <PageSectionUsability content=content(images) /> }.to_html();

        assert_eq!(html.matches("usability-image usability-image--wide").count(), 1);
        assert_eq!(html.matches("class=\"usability-image\"").count(), 2);
        assert_eq!(html.matches("<picture").count(), 3);

        let desktop = html.find("alt=\"desktop\"").expect("desktop image");
        let mobile = html.find("alt=\"mobile\"").expect("mobile image");
        assert!(desktop < mobile);
    }

    #[test]
    fn renders_copy_and_call_to_action() {
        let html = view! { <PageSectionUsability content=content(vec![]) /> }.to_html();

        assert!(html.contains("class=\"section-text-header centered usability-header\""));
        assert!(html.contains("<h2>Usability</h2>"));
        assert!(html.contains("Built for people"));
        assert!(html.contains("Wallets and tools that stay out of the way."));
        assert!(html.contains("href=\"/wallets\""));
        assert!(html.contains("Try the wallet"));
    }

    #[test]
    fn decorations_are_hidden_from_assistive_tech() {
        let html = view! { <PageSectionUsability content=content(vec![]) /> }.to_html();

        assert!(html.contains("src=\"/images/svgs/birds.svg\""));
        assert!(html.contains("src=\"/images/svgs/yellow-mountains.svg\""));
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), 2);
    }
}
