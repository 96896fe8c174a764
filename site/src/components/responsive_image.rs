//! Multi-source image.
//!
//! Format negotiation is left to the browser: every encoded variant becomes a
//! `<source>` in descriptor order, so the first supported one wins, and the
//! fallback encoding goes into the single `<img>`.

use leptos::prelude::*;

use super::class_list;
use crate::types::{ImageDescriptor, ImageSource};

/// `<picture>` for an [`ImageDescriptor`], capped at its intrinsic width.
///
/// Assumes the descriptor has at least one source; see
/// [`crate::types::Validate`].
#[component]
pub fn ResponsiveImage(image: ImageDescriptor, #[prop(optional, into)] class: String) -> impl IntoView {
    let ImageDescriptor {
        alt_text,
        width,
        sources,
        fallback,
        ..
    } = image;
    let class = class_list([("responsive-image", true), (class.as_str(), true)]);
    let style = format!("max-width: {}px;", width);

    view! {
        <div class=class style=style>
            <picture class="responsive-image__picture">
                {sources.into_iter().map(source).collect::<Vec<_>>()}
                <img
                    src=fallback.src
                    srcset=fallback.src_set
                    sizes=fallback.sizes
                    decoding="async"
                    loading="lazy"
                    alt=alt_text
                />
            </picture>
        </div>
    }
}

fn source(source: ImageSource) -> impl IntoView {
    view! {
        <source
            srcset=source.src_set
            sizes=source.sizes
            type=source.mime_type
            media=source.media
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FallbackImage;
    use leptos::tachys::view::RenderHtml;

    fn descriptor(formats: &[&str]) -> ImageDescriptor {
        ImageDescriptor {
            alt_text: "Desktop wallet".into(),
            width: 960,
            height: 640,
            sources: formats
                .iter()
                .map(|format| ImageSource {
                    src_set: format!("/img/wallet-480.{0} 480w, /img/wallet-960.{0} 960w", format),
                    sizes: Some("(min-width: 960px) 960px, 100vw".into()),
                    mime_type: format!("image/{}", format),
                    media: None,
                })
                .collect(),
            fallback: FallbackImage {
                src: "/img/wallet-960.png".into(),
                src_set: Some("/img/wallet-480.png 480w, /img/wallet-960.png 960w".into()),
                sizes: Some("(min-width: 960px) 960px, 100vw".into()),
            },
        }
    }

    #[test]
    fn offers_every_variant_and_one_fallback() {
        for formats in [vec!["avif"], vec!["avif", "webp"], vec!["avif", "webp", "jxl"]] {
            let html = view! { <ResponsiveImage image=descriptor(&formats) /> }.to_html();

            assert_eq!(html.matches("<source").count(), formats.len());
            assert_eq!(html.matches("<img").count(), 1);
        }
    }

    #[test]
    fn sources_keep_descriptor_order() {
        let html = view! { <ResponsiveImage image=descriptor(&["avif", "webp"]) /> }.to_html();

        let avif = html.find("type=\"image/avif\"").expect("avif source");
        let webp = html.find("type=\"image/webp\"").expect("webp source");
        let img = html.find("<img").expect("fallback");
        assert!(avif < webp);
        assert!(webp < img);
    }

    #[test]
    fn fallback_carries_alt_and_loading_hints() {
        let html = view! { <ResponsiveImage image=descriptor(&["webp"]) /> }.to_html();

        assert!(html.contains("alt=\"Desktop wallet\""));
        assert!(html.contains("decoding=\"async\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("src=\"/img/wallet-960.png\""));
    }

    #[test]
    fn width_is_capped_at_intrinsic_width() {
        let html = view! { <ResponsiveImage image=descriptor(&["webp"]) /> }.to_html();

        assert!(html.contains("max-width: 960px;"));
    }
}
