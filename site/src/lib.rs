//! # site-leptos
//!
//! Leptos SSR components for the Alephium marketing pages.
//!
//! Content records (deserialized from front matter or JSON) go in, static
//! HTML comes out. There is no hydration: the only client-side code is the
//! small inline motion script that plays the one-shot reveals and parallax.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_leptos::{render_hackathon_page, DocumentMeta, PageAssets};
//! use site_leptos::types::HackathonPageContent;
//!
//! let content = HackathonPageContent::default();
//! let html = render_hackathon_page(&content, &PageAssets::default(), &DocumentMeta::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content records and their invariant checks
//! - [`theme`] - Light and dark token sets, published as CSS variables
//! - [`components`] - Section and card components
//! - [`pages`] - Full pages composed from sections
//! - [`motion`] - Reveal timing and the motion script
//! - [`styles`] - CSS constants
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod motion;
pub mod pages;
pub mod styles;
pub mod theme;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::{Deserialize, Serialize};

use components::{NumbersInfo, PageDocument, PageSectionContainer, PageSectionTodoList, PageSectionUsability, ThemeProvider};
use pages::HackathonPage;
use theme::ThemeName;
use types::{HackathonPageContent, NumbersInfoContent, TodoListContent, UsabilityContent};

pub use error::{ContentError, ThemeError};

/// Render the hackathon page as a complete HTML document.
///
/// The page is always dark and always lays out landing, intro and info in
/// that order.
pub fn render_hackathon_page(
    content: &HackathonPageContent,
    assets: &PageAssets,
    meta: &DocumentMeta,
) -> String {
    let content = content.clone();
    let assets = assets.clone();
    let doc = view! {
        <PageDocument meta=meta.clone()>
            <HackathonPage content=content assets=assets />
        </PageDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// A single section rendered on its own, for previews.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionPreview {
    /// Roadmap checklists
    TodoList(TodoListContent),
    /// Usability showcase
    Usability(UsabilityContent),
    /// A row of key figures
    Numbers(Vec<NumbersInfoContent>),
}

impl SectionPreview {
    /// Short name used in logs and on the command line.
    pub fn kind(&self) -> &'static str {
        match self {
            SectionPreview::TodoList(_) => "todo-list",
            SectionPreview::Usability(_) => "usability",
            SectionPreview::Numbers(_) => "numbers",
        }
    }
}

/// Render one section inside a themed document.
pub fn render_section_preview(
    section: SectionPreview,
    theme: ThemeName,
    assets: &PageAssets,
    meta: &DocumentMeta,
) -> String {
    let assets = assets.clone();
    let doc = view! {
        <PageDocument meta=meta.clone()>
            <ThemeProvider theme=theme.theme()>
                {section_view(section, assets)}
            </ThemeProvider>
        </PageDocument>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

fn section_view(section: SectionPreview, assets: PageAssets) -> AnyView {
    match section {
        SectionPreview::TodoList(content) => {
            view! { <PageSectionTodoList content=content assets=assets /> }.into_any()
        }
        SectionPreview::Usability(content) => {
            view! { <PageSectionUsability content=content assets=assets /> }.into_any()
        }
        SectionPreview::Numbers(figures) => view! {
            <PageSectionContainer class="numbers-grid">
                {figures
                    .into_iter()
                    .map(|figure| view! { <NumbersInfo number=figure.number description=figure.description /> })
                    .collect::<Vec<_>>()}
            </PageSectionContainer>
        }
        .into_any(),
    }
}

/// URLs of the decorative images the sections draw.
///
/// These are site assets rather than content, so they come from
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageAssets {
    /// Backdrop of the roadmap section
    pub stars_background: String,
    /// Bottom decoration of the usability section
    pub yellow_mountains: String,
    /// Top decoration of the usability section
    pub birds: String,
    /// Header photo of the hackathon page
    pub hackathon_background: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            stars_background: "/images/stars.svg".to_string(),
            yellow_mountains: "/images/svgs/yellow-mountains.svg".to_string(),
            birds: "/images/svgs/birds.svg".to_string(),
            hackathon_background: "/images/alephium-hackathon-lake.jpg".to_string(),
        }
    }
}

/// Document-level metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMeta {
    /// `<title>` text
    pub title: String,
    /// `lang` attribute of the root element
    pub lang: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: "Alephium".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{HackathonIntroContent, HackathonLandingContent, TodoItem, TodoList};

    fn hackathon() -> HackathonPageContent {
        HackathonPageContent {
            landing: HackathonLandingContent {
                tagline: "Build the next dApp".into(),
                title: "Alephium Hackathon".into(),
                date: "March 2022".into(),
            },
            intro: HackathonIntroContent {
                title: "What is it about".into(),
                subtitle: "Four weeks of building".into(),
                description: "Ship something on mainnet.".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_hackathon_page(&hackathon(), &PageAssets::default(), &DocumentMeta::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Alephium</title>"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn borrowed_content_stays_usable_after_rendering() {
        let content = hackathon();
        let assets = PageAssets::default();
        let meta = DocumentMeta::default();

        let first = render_hackathon_page(&content, &assets, &meta);
        let second = render_hackathon_page(&content, &assets, &meta);

        assert_eq!(first, second);
        assert_eq!(content.landing.title, "Alephium Hackathon");
    }

    #[test]
    fn hackathon_sections_in_fixed_order() {
        let html = render_hackathon_page(&hackathon(), &PageAssets::default(), &DocumentMeta::default());

        let landing = html.find("class=\"hackathon-landing\"").expect("landing");
        let intro = html.find("class=\"hackathon-intro\"").expect("intro");
        let info = html.find("class=\"hackathon-info\"").expect("info");
        assert!(landing < intro);
        assert!(intro < info);
        assert_eq!(html.matches("<hr class=\"section-divider\"").count(), 2);
    }

    #[test]
    fn hackathon_page_is_always_dark() {
        let html = render_hackathon_page(&hackathon(), &PageAssets::default(), &DocumentMeta::default());

        assert!(html.contains("theme-scope theme-dark"));
        assert!(!html.contains("theme-light"));
        assert!(html.contains("url('/images/alephium-hackathon-lake.jpg')"));
    }

    #[test]
    fn section_preview_uses_requested_theme() {
        let section = SectionPreview::TodoList(TodoListContent {
            title: "Roadmap".into(),
            subtitle: "Next".into(),
            lists: vec![TodoList {
                title: "Node".into(),
                items: vec![TodoItem {
                    text: "Sharding".into(),
                    complete: true,
                    ..Default::default()
                }],
            }],
        });
        assert_eq!(section.kind(), "todo-list");

        let html = render_section_preview(section, ThemeName::Light, &PageAssets::default(), &DocumentMeta::default());

        assert!(html.contains("theme-scope theme-light"));
        assert!(html.contains("Sharding"));
    }

    #[test]
    fn numbers_preview_keeps_figure_order() {
        let section = SectionPreview::Numbers(vec![
            NumbersInfoContent {
                number: "16s".into(),
                description: "Block time".into(),
            },
            NumbersInfoContent {
                number: "16".into(),
                description: "Shards".into(),
            },
        ]);
        let html = render_section_preview(section, ThemeName::Dark, &PageAssets::default(), &DocumentMeta::default());

        let block_time = html.find("Block time").expect("first figure");
        let shards = html.find("Shards").expect("second figure");
        assert!(block_time < shards);
        assert!(html.contains("numbers-grid"));
    }
}
