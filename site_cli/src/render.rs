//! Subcommand handlers.

use std::path::Path;

use anyhow::{Context, Result};
use site_leptos::theme::ThemeName;
use site_leptos::types::HackathonPageContent;
use site_leptos::{render_hackathon_page, render_section_preview, SectionPreview};
use tracing::info;

use crate::args::{ContentKind, SectionKind};
use crate::config::SiteConfig;
use crate::content::{self, Content};

/// `site-render hackathon`
pub fn hackathon(config: &SiteConfig, content: &Path, out: &Path) -> Result<()> {
    let page: HackathonPageContent = content::load(content)?;
    let html = render_hackathon_page(&page, &config.assets, &config.site);
    write_html(out, &html)?;
    info!("Hackathon page written to {} ({} bytes)", out.display(), html.len());
    Ok(())
}

/// `site-render section`
pub fn section(
    config: &SiteConfig,
    kind: SectionKind,
    content: &Path,
    out: &Path,
    theme: ThemeName,
) -> Result<()> {
    let section = content::load_section(kind, content)?;
    let name = section.kind();
    let html = render_section_preview(section, theme, &config.assets, &config.site);
    write_html(out, &html)?;
    info!(
        "{} preview ({}) written to {}",
        name,
        theme.as_str(),
        out.display()
    );
    Ok(())
}

/// `site-render check`
pub fn check(kind: ContentKind, content: &Path) -> Result<()> {
    let loaded = content::load_kind(kind, content)?;
    let summary = match &loaded {
        Content::Hackathon(page) => format!(
            "{} tracks, {} schedule events",
            page.info.ideas_and_tracks.tracks.len(),
            page.info.schedule.events.len()
        ),
        Content::Section(SectionPreview::TodoList(todo)) => format!("{} lists", todo.lists.len()),
        Content::Section(SectionPreview::Usability(usability)) => {
            format!("{} images", usability.images.len())
        }
        Content::Section(SectionPreview::Numbers(figures)) => format!("{} figures", figures.len()),
    };
    println!("{}: ok ({})", content.display(), summary);
    Ok(())
}

fn write_html(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}
