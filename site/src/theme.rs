//! Color themes.
//!
//! A [`Theme`] maps semantic role names to concrete colors. Components never
//! read it directly: [`crate::components::ThemeProvider`] publishes it as CSS
//! custom properties (`--theme-bg-primary`, ...) on its scope element and the
//! component styles reference those properties. Swapping the theme therefore
//! never touches component markup.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The two themes the site ships.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Default marketing theme
    #[default]
    Light,
    /// Event pages
    Dark,
}

impl ThemeName {
    /// Token values for this theme.
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Light => Theme::light(),
            ThemeName::Dark => Theme::dark(),
        }
    }

    /// Lowercase name, also used as the scope class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

/// Semantic color tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Which variant these tokens belong to
    pub name: ThemeName,
    /// Main surface
    pub bg_primary: String,
    /// Raised surface (cards)
    pub bg_secondary: String,
    /// Recessed surface
    pub bg_tertiary: String,
    /// Headings and body text
    pub text_primary: String,
    /// Supporting text
    pub text_secondary: String,
    /// Muted text
    pub text_tertiary: String,
    /// Accent text (dates, highlights)
    pub text_highlight: String,
    /// Hairlines and card borders
    pub border_primary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light/default theme.
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            bg_primary: "#ffffff".into(),
            bg_secondary: "#f7f7f8".into(),
            bg_tertiary: "#efeff1".into(),
            text_primary: "#1d1d1f".into(),
            text_secondary: "#4a4a50".into(),
            text_tertiary: "#77777d".into(),
            text_highlight: "#d4881c".into(),
            border_primary: "#e3e3e6".into(),
        }
    }

    /// Dark theme used by event pages.
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            bg_primary: "#1c1c1e".into(),
            bg_secondary: "#141416".into(),
            bg_tertiary: "#0d0d0f".into(),
            text_primary: "#f4f4f5".into(),
            text_secondary: "#b4b4b9".into(),
            text_tertiary: "#8a8a90".into(),
            text_highlight: "#ffc857".into(),
            border_primary: "#2e2e33".into(),
        }
    }

    /// Role name / value pairs in a stable order.
    pub fn tokens(&self) -> [(&'static str, &str); 8] {
        [
            ("bg-primary", self.bg_primary.as_str()),
            ("bg-secondary", self.bg_secondary.as_str()),
            ("bg-tertiary", self.bg_tertiary.as_str()),
            ("text-primary", self.text_primary.as_str()),
            ("text-secondary", self.text_secondary.as_str()),
            ("text-tertiary", self.text_tertiary.as_str()),
            ("text-highlight", self.text_highlight.as_str()),
            ("border-primary", self.border_primary.as_str()),
        ]
    }

    /// Inline `style` value publishing every token as a custom property.
    ///
    /// Also derives the translucent surfaces used by the landing section
    /// (`--theme-bg-tertiary-70`, `--theme-bg-primary-30`). A token that is not
    /// a hex color keeps its plain property and loses its derived one.
    pub fn css_variables(&self) -> String {
        let mut css = self
            .tokens()
            .iter()
            .map(|(role, value)| format!("--theme-{}: {};", role, value))
            .collect::<Vec<_>>()
            .join(" ");

        for (role, value, alpha, suffix) in [
            ("bg-tertiary", &self.bg_tertiary, 0.7, "70"),
            ("bg-primary", &self.bg_primary, 0.3, "30"),
        ] {
            match translucent(value, alpha) {
                Ok(hex) => css.push_str(&format!(" --theme-{}-{}: {};", role, suffix, hex)),
                Err(err) => {
                    tracing::warn!(theme = self.name.as_str(), role, %err, "skipping translucent token")
                }
            }
        }

        css
    }
}

/// An sRGB color with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is opaque
    pub a: u8,
}

impl Rgba {
    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(literal: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor(literal.to_string());
        let digits = literal.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                    a: 255,
                })
            }
            6 | 8 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
                a: if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    255
                },
            }),
            _ => Err(invalid()),
        }
    }

    /// Same color with alpha set to `alpha` (0.0..=1.0).
    pub fn with_alpha(self, alpha: f64) -> Result<Self, ThemeError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ThemeError::AlphaOutOfRange(alpha.to_string()));
        }
        Ok(Self {
            a: (alpha * 255.0).round() as u8,
            ..self
        })
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// `color` at `alpha`, as a hex literal.
pub fn translucent(color: &str, alpha: f64) -> Result<String, ThemeError> {
    Ok(Rgba::parse_hex(color)?.with_alpha(alpha)?.to_hex())
}
