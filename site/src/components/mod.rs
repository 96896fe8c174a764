//! Leptos UI components for the marketing pages.
//!
//! Every component is a pure function of its props: content in, markup out.
//! Colors come from the enclosing [`ThemeProvider`] through CSS custom
//! properties, so no component needs the theme value itself.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── ThemeProvider
//!     ├── PageSectionTodoList
//!     │   ├── SectionTextHeader
//!     │   └── TodoColumn (per list) ── TodoEntry (per item)
//!     ├── PageSectionUsability
//!     │   ├── SectionTextHeader, TextSnippet, Button
//!     │   └── ResponsiveImage (per image)
//!     ├── GridCard ── Card, TextSnippet, ArrowedLink
//!     ├── TrackCard ── Card
//!     └── NumbersInfo
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use site_leptos::components::{GridCard, ThemeProvider};
//! use site_leptos::theme::Theme;
//! use site_leptos::types::LinkDescriptor;
//!
//! view! {
//!     <ThemeProvider theme=Theme::light()>
//!         <GridCard
//!             title="Wallets"
//!             subtitle="Desktop, mobile and extension"
//!             link=LinkDescriptor::new("/wallets", "Get a wallet")
//!         />
//!     </ThemeProvider>
//! }
//! ```

mod brand;
mod card;
mod document;
mod grid_card;
mod icons;
mod layout;
mod links;
mod numbers_info;
mod responsive_image;
mod text;
mod todo_list;
mod track_card;
mod usability;

pub use brand::BrandLogo;
pub use card::Card;
pub use document::PageDocument;
pub use grid_card::GridCard;
pub use icons::*;
pub use layout::{PageSectionContainer, ParallaxWrapper, SectionDivider, ThemeProvider};
pub use links::{ArrowedLink, Button};
pub use numbers_info::NumbersInfo;
pub use responsive_image::ResponsiveImage;
pub use text::{HeadingLevel, SectionTextHeader, TextSnippet};
pub use todo_list::{aligned_right, PageSectionTodoList};
pub use track_card::TrackCard;
pub use usability::{image_cell_class, PageSectionUsability};

/// Join the class names whose flag is set, skipping empty names.
pub(crate) fn class_list<'a>(parts: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    parts
        .into_iter()
        .filter(|(name, on)| *on && !name.is_empty())
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" ")
}
