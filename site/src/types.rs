//! Content records consumed by the site components.
//!
//! These types describe what a view shows, never how. They're designed to be:
//!
//! - **Serializable** - front matter and CMS exports deserialize straight into them
//! - **Clone-friendly** - components take owned copies, content is never mutated
//! - **Default-able** - tests and previews build partial records with `..Default::default()`
//!
//! Wire names are camelCase, matching the content files the site is authored in.
//!
//! # Example
//!
//! ```rust
//! use site_leptos::types::{TodoItem, TodoList, TodoListContent};
//!
//! let content = TodoListContent {
//!     title: "What's next".into(),
//!     subtitle: "Our roadmap".into(),
//!     lists: vec![TodoList {
//!         title: "Design".into(),
//!         items: vec![TodoItem {
//!             text: "Ship v1".into(),
//!             complete: true,
//!             ..Default::default()
//!         }],
//!     }],
//! };
//! assert_eq!(content.lists.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Where a call-to-action goes and how it is labelled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    /// Destination, opaque to this crate. Older content calls it `to`.
    #[serde(alias = "to")]
    pub url: String,
    /// Visible label
    pub text: String,
    /// Open in a new browsing context
    #[serde(default)]
    pub new_tab: bool,
}

impl LinkDescriptor {
    /// Link that navigates in place.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            new_tab: false,
        }
    }

    /// Same link, opening a new tab instead.
    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }

    /// `target` attribute value, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }

    /// `rel` attribute value, if any.
    pub fn rel(&self) -> Option<&'static str> {
        self.new_tab.then_some("noopener noreferrer")
    }
}

/// One encoded candidate offered to the browser (`<source>`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// `srcset` candidates for this encoding
    pub src_set: String,
    /// `sizes` hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// MIME type, e.g. `image/avif`
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Optional media query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// The encoding every browser understands (`<img>`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackImage {
    /// Plain `src`
    pub src: String,
    /// `srcset` candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_set: Option<String>,
    /// `sizes` hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// An image as produced by the image pipeline.
///
/// Deserializes from either the flat shape below or the pipeline's nested
/// `src.childImageSharp.gatsbyImageData` shape, picked by the presence of a
/// top-level `src` key. Always serializes flat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct ImageDescriptor {
    /// Alternative text
    pub alt_text: String,
    /// Intrinsic width in CSS pixels; caps the rendered width
    pub width: u32,
    /// Intrinsic height in CSS pixels
    pub height: u32,
    /// Encoded variants in preference order
    pub sources: Vec<ImageSource>,
    /// Fallback encoding
    pub fallback: FallbackImage,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipelineImage {
    alt_text: String,
    src: PipelineSrc,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipelineSrc {
    child_image_sharp: ChildImageSharp,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChildImageSharp {
    gatsby_image_data: PipelineImageData,
}

#[derive(Deserialize)]
struct PipelineImageData {
    width: u32,
    #[serde(default)]
    height: u32,
    images: PipelineImages,
}

#[derive(Deserialize)]
struct PipelineImages {
    fallback: FallbackImage,
    #[serde(default)]
    sources: Vec<ImageSource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlatImage {
    alt_text: String,
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    sources: Vec<ImageSource>,
    fallback: FallbackImage,
}

impl TryFrom<serde_json::Value> for ImageDescriptor {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        if value.get("src").is_some() {
            let image: PipelineImage = serde_json::from_value(value)?;
            let data = image.src.child_image_sharp.gatsby_image_data;
            return Ok(Self {
                alt_text: image.alt_text,
                width: data.width,
                height: data.height,
                sources: data.images.sources,
                fallback: data.images.fallback,
            });
        }

        let image: FlatImage = serde_json::from_value(value)?;
        Ok(Self {
            alt_text: image.alt_text,
            width: image.width,
            height: image.height,
            sources: image.sources,
            fallback: image.fallback,
        })
    }
}

/// Label/number pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersInfoContent {
    /// The figure, already formatted ("1.2M", "99%")
    pub number: String,
    /// What the figure counts
    pub description: String,
}

/// A single checklist entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Item text
    pub text: String,
    /// Badge text; empty means no badge
    #[serde(default)]
    pub label: String,
    /// Done already
    #[serde(default)]
    pub complete: bool,
}

/// A named checklist column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    /// Column heading
    pub title: String,
    /// Entries in display order
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

/// Content of the roadmap/todo section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Two or more checklist columns
    pub lists: Vec<TodoList>,
}

/// Content of the usability showcase section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsabilityContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Body text under the header
    pub description: String,
    /// Call to action
    pub button: LinkDescriptor,
    /// Screenshots; the first one is shown full width
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

/// A hackathon track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackContent {
    /// Track name
    pub title: String,
    /// What the track is about
    pub description: String,
}

/// Header photo block of the hackathon page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonLandingContent {
    /// One-line pitch under the title
    pub tagline: String,
    /// Event name
    pub title: String,
    /// Event dates, preformatted
    pub date: String,
}

/// Intro text block of the hackathon page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonIntroContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Body text
    pub description: String,
}

/// "Who can join" card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsInfo {
    /// Card title
    pub title: String,
    /// Card text
    pub description: String,
    /// Registration link
    pub link: LinkDescriptor,
}

/// "What you need" card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisites {
    /// Card title
    pub title: String,
    /// Card text
    pub description: String,
    /// Skills listed under the text
    #[serde(default)]
    pub skills: Vec<String>,
    /// Documentation link
    pub link: LinkDescriptor,
}

/// Event timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Block title
    pub title: String,
    /// Block text
    pub description: String,
    /// Timeline entries, preformatted
    #[serde(default)]
    pub events: Vec<String>,
}

/// Track overview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasAndTracks {
    /// Block title
    pub title: String,
    /// Block subtitle
    pub subtitle: String,
    /// One card per track
    #[serde(default)]
    pub tracks: Vec<TrackContent>,
}

/// Practical information block of the hackathon page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonInfoContent {
    /// Who can join
    pub participants_info: ParticipantsInfo,
    /// What you need
    pub prerequisites: Prerequisites,
    /// When things happen
    pub schedule: Schedule,
    /// What to build
    pub ideas_and_tracks: IdeasAndTracks,
}

/// Everything the hackathon page shows, resolved from one content record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackathonPageContent {
    /// Header photo block
    #[serde(rename = "headerLandingSection")]
    pub landing: HackathonLandingContent,
    /// Intro text block
    #[serde(rename = "introSection")]
    pub intro: HackathonIntroContent,
    /// Practical information block
    #[serde(rename = "hackathonInfo")]
    pub info: HackathonInfoContent,
}

// =============================================================================
// Invariant checks
// =============================================================================

/// Checks the data-model invariants of a content record.
///
/// Components assume these hold and never check them; call `validate` at the
/// content boundary, before rendering.
pub trait Validate {
    /// Check this record, reporting errors under the field path `at`.
    fn check(&self, at: &str) -> Result<(), ContentError>;

    /// Check this record as the root of a content object.
    fn validate(&self) -> Result<(), ContentError> {
        self.check("content")
    }
}

fn field(at: &str, name: &str) -> String {
    format!("{}.{}", at, name)
}

fn index(at: &str, idx: usize) -> String {
    format!("{}[{}]", at, idx)
}

impl Validate for LinkDescriptor {
    fn check(&self, at: &str) -> Result<(), ContentError> {
        if self.url.trim().is_empty() {
            return Err(ContentError::EmptyLinkDestination { path: at.to_string() });
        }
        Ok(())
    }
}

impl Validate for ImageDescriptor {
    fn check(&self, at: &str) -> Result<(), ContentError> {
        if self.sources.is_empty() {
            return Err(ContentError::EmptyImageSources {
                path: at.to_string(),
                alt: self.alt_text.clone(),
            });
        }
        Ok(())
    }
}

impl Validate for NumbersInfoContent {
    fn check(&self, _at: &str) -> Result<(), ContentError> {
        Ok(())
    }
}

impl Validate for TodoListContent {
    fn check(&self, _at: &str) -> Result<(), ContentError> {
        Ok(())
    }
}

impl Validate for UsabilityContent {
    fn check(&self, at: &str) -> Result<(), ContentError> {
        self.button.check(&field(at, "button"))?;
        let images = field(at, "images");
        for (idx, image) in self.images.iter().enumerate() {
            image.check(&index(&images, idx))?;
        }
        Ok(())
    }
}

impl Validate for HackathonPageContent {
    fn check(&self, at: &str) -> Result<(), ContentError> {
        let info = field(at, "hackathonInfo");
        self.info
            .participants_info
            .link
            .check(&field(&field(&info, "participantsInfo"), "link"))?;
        self.info
            .prerequisites
            .link
            .check(&field(&field(&info, "prerequisites"), "link"))?;
        Ok(())
    }
}
