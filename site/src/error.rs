//! Error types for content validation and theme tokens.
//!
//! Rendering itself never fails. These errors only surface at the content
//! boundary (before a page is rendered) and when deriving theme tokens.

/// A content record breaks one of the data-model invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A link was supplied without a destination.
    #[error("{path}: link destination is empty")]
    EmptyLinkDestination {
        /// Dotted path to the offending link, e.g. `content.button`
        path: String,
    },

    /// An image descriptor carries no encoded source variants.
    #[error("{path}: image \"{alt}\" has no source variants")]
    EmptyImageSources {
        /// Dotted path to the offending image
        path: String,
        /// Alt text of the image, to make the message findable
        alt: String,
    },
}

/// A theme token could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// Color literal is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    /// Alpha factor outside `0.0..=1.0`.
    #[error("Alpha out of range: {0}")]
    AlphaOutOfRange(String),
}
