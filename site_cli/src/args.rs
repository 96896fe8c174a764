//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use site_leptos::theme::ThemeName;

#[derive(Parser, Debug)]
#[command(name = "site-render")]
#[command(about = "Render marketing site content into static HTML pages")]
#[command(version)]
pub struct Args {
    /// Site configuration file
    #[arg(long, global = true, default_value = "site.toml")]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the hackathon page
    Hackathon {
        /// Page content (.md front matter, .yaml or .json)
        #[arg(long)]
        content: PathBuf,
        /// Output HTML file
        #[arg(long)]
        out: PathBuf,
    },
    /// Render a single section preview
    Section {
        /// Which section the content describes
        kind: SectionKind,
        /// Section content (.md front matter, .yaml or .json)
        #[arg(long)]
        content: PathBuf,
        /// Output HTML file
        #[arg(long)]
        out: PathBuf,
        /// Color theme of the preview
        #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
        theme: ThemeArg,
    },
    /// Validate content without rendering
    Check {
        /// Content file to validate
        #[arg(long)]
        content: PathBuf,
        /// What the content describes
        #[arg(long, value_enum)]
        kind: ContentKind,
    },
}

/// Sections that can be previewed on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionKind {
    TodoList,
    Usability,
    Numbers,
}

/// Every kind of content file the tool reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Hackathon,
    TodoList,
    Usability,
    Numbers,
}

impl ContentKind {
    /// The previewable section this content describes, if any.
    pub fn section(self) -> Option<SectionKind> {
        match self {
            ContentKind::Hackathon => None,
            ContentKind::TodoList => Some(SectionKind::TodoList),
            ContentKind::Usability => Some(SectionKind::Usability),
            ContentKind::Numbers => Some(SectionKind::Numbers),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeName {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => ThemeName::Light,
            ThemeArg::Dark => ThemeName::Dark,
        }
    }
}
