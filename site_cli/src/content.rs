//! Content files: format detection, front matter, parsing and validation.
//!
//! Markdown files carry their record in YAML front matter between two `---`
//! lines; `.yaml`/`.yml` and `.json` files are the record itself.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use site_leptos::types::{
    HackathonPageContent, NumbersInfoContent, TodoListContent, UsabilityContent, Validate,
};
use site_leptos::SectionPreview;

use crate::args::{ContentKind, SectionKind};

/// How a content file is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Markdown,
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("md") | Some("markdown") => Ok(Format::Markdown),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!(
                "Unsupported content file {} (expected .md, .yaml or .json)",
                path.display()
            ),
        }
    }
}

/// The YAML between the leading `---` fences of a Markdown document.
///
/// Returns `None` when the document doesn't open with a fence or the fence
/// is never closed.
pub fn front_matter(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse `text` as a record of type `T`.
pub fn parse<T: DeserializeOwned>(text: &str, format: Format) -> Result<T> {
    match format {
        Format::Markdown => {
            let yaml = front_matter(text).context("Markdown content has no front matter")?;
            serde_yaml::from_str(yaml).context("Invalid front matter")
        }
        Format::Yaml => serde_yaml::from_str(text).context("Invalid YAML content"),
        Format::Json => serde_json::from_str(text).context("Invalid JSON content"),
    }
}

/// Read, parse and validate the record at `path`.
pub fn load<T: DeserializeOwned + Validate>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let record: T =
        parse(&text, format).with_context(|| format!("Failed to parse {}", path.display()))?;
    record
        .validate()
        .with_context(|| format!("Invalid content in {}", path.display()))?;
    tracing::debug!("Loaded {} ({:?})", path.display(), format);
    Ok(record)
}

/// Figures for the numbers preview: a bare list or a `numbers` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumbersFile {
    List(Vec<NumbersInfoContent>),
    Keyed { numbers: Vec<NumbersInfoContent> },
}

impl Validate for NumbersFile {
    fn check(&self, at: &str) -> Result<(), site_leptos::ContentError> {
        let figures = match self {
            NumbersFile::List(figures) => figures,
            NumbersFile::Keyed { numbers } => numbers,
        };
        for (i, figure) in figures.iter().enumerate() {
            figure.check(&format!("{}[{}]", at, i))?;
        }
        Ok(())
    }
}

impl From<NumbersFile> for Vec<NumbersInfoContent> {
    fn from(file: NumbersFile) -> Self {
        match file {
            NumbersFile::List(figures) => figures,
            NumbersFile::Keyed { numbers } => numbers,
        }
    }
}

/// A loaded, validated content record of any kind.
#[derive(Debug)]
pub enum Content {
    Hackathon(HackathonPageContent),
    Section(SectionPreview),
}

/// Load the record at `path` as a section preview of `kind`.
pub fn load_section(kind: SectionKind, path: &Path) -> Result<SectionPreview> {
    Ok(match kind {
        SectionKind::TodoList => SectionPreview::TodoList(load::<TodoListContent>(path)?),
        SectionKind::Usability => SectionPreview::Usability(load::<UsabilityContent>(path)?),
        SectionKind::Numbers => SectionPreview::Numbers(load::<NumbersFile>(path)?.into()),
    })
}

/// Load the record at `path` as content of `kind`.
pub fn load_kind(kind: ContentKind, path: &Path) -> Result<Content> {
    match kind.section() {
        Some(section) => load_section(section, path).map(Content::Section),
        None => load::<HackathonPageContent>(path).map(Content::Hackathon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn front_matter_between_fences() {
        let doc = "---\ntitle: Roadmap\nsubtitle: Next\n---\n\n# Body text\n";

        assert_eq!(front_matter(doc), Some("title: Roadmap\nsubtitle: Next\n"));
    }

    #[test]
    fn front_matter_handles_crlf_and_empty_block() {
        assert_eq!(front_matter("---\r\ntitle: A\r\n---\r\nbody"), Some("title: A\r\n"));
        assert_eq!(front_matter("---\n---\n"), Some(""));
    }

    #[test]
    fn no_front_matter_without_fences() {
        assert_eq!(front_matter("# Just markdown\n"), None);
        assert_eq!(front_matter("---\ntitle: never closed\n"), None);
        assert_eq!(front_matter("----\ntitle: A\n---\n"), None);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/index.md")).ok(), Some(Format::Markdown));
        assert_eq!(Format::from_path(Path::new("page.YML")).ok(), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("page.json")).ok(), Some(Format::Json));
        assert!(Format::from_path(Path::new("page.toml")).is_err());
    }

    #[test]
    fn loads_todo_list_from_markdown() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("roadmap.md");
        std::fs::write(
            &path,
            "---\ntitle: Roadmap\nsubtitle: Next\nlists:\n  - title: Design\n    items:\n      - text: Ship v1\n        complete: true\n---\n",
        )
        .expect("write content");

        let content: TodoListContent = load(&path).expect("valid content");
        assert_eq!(content.lists.len(), 1);
        assert_eq!(content.lists[0].items[0].text, "Ship v1");
        assert!(content.lists[0].items[0].complete);
        assert_eq!(content.lists[0].items[0].label, "");
    }

    #[test]
    fn numbers_accept_list_or_keyed_shape() {
        let list: NumbersFile =
            parse(r#"[{"number": "16s", "description": "Block time"}]"#, Format::Json)
                .expect("list");
        let keyed: NumbersFile =
            parse("numbers:\n  - number: '16'\n    description: Shards\n", Format::Yaml)
                .expect("keyed");

        assert_eq!(Vec::<NumbersInfoContent>::from(list)[0].number, "16s");
        assert_eq!(Vec::<NumbersInfoContent>::from(keyed)[0].description, "Shards");
    }

    #[test]
    fn empty_link_is_reported_with_field_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("usability.json");
        std::fs::write(
            &path,
            r#"{
                "title": "Usability",
                "subtitle": "Built for people",
                "description": "Easy",
                "button": { "url": " ", "text": "Try" },
                "images": []
            }"#,
        )
        .expect("write content");

        let err = load::<UsabilityContent>(&path).expect_err("empty link");
        let message = format!("{:#}", err);
        assert!(message.contains("content.button"), "{}", message);
        assert!(message.contains("link destination is empty"), "{}", message);
    }
}
