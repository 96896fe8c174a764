//! Text blocks: headings with optional subtitle and body.

use leptos::prelude::*;

use super::class_list;

/// Heading element used for a snippet title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    #[default]
    H2,
    /// `<h3>`
    H3,
}

fn heading(level: HeadingLevel, text: String) -> AnyView {
    match level {
        HeadingLevel::H1 => view! { <h1>{text}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2>{text}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3>{text}</h3> }.into_any(),
    }
}

/// Title, subtitle and free body content.
///
/// Empty title or subtitle strings render nothing, same as leaving them out.
#[component]
pub fn TextSnippet(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] title_level: HeadingLevel,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] big_subtitle: bool,
    #[prop(optional)] big_text: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = class_list([
        ("text-snippet", true),
        ("big-subtitle", big_subtitle),
        ("big-text", big_text),
        (class.as_str(), true),
    ]);
    let title = title.filter(|t| !t.is_empty());
    let subtitle = subtitle.filter(|s| !s.is_empty());

    view! {
        <div class=class>
            {title.map(|title| heading(title_level, title))}
            {subtitle.map(|subtitle| view! { <p class="subtitle">{subtitle}</p> })}
            {children.map(|children| view! { <div class="text-snippet__body">{children()}</div> })}
        </div>
    }
}

/// Section-level header: a large `<h2>` title with subtitle.
#[component]
pub fn SectionTextHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Anchor id for in-page links
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional)] centered: bool,
    #[prop(optional)] big_subtitle: bool,
    #[prop(optional)] big_text: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = class_list([
        ("section-text-header", true),
        ("centered", centered),
        (class.as_str(), true),
    ]);
    let subtitle = subtitle.unwrap_or_default();

    view! {
        <header class=class id=id>
            <TextSnippet
                title=title
                title_level=HeadingLevel::H2
                subtitle=subtitle
                big_subtitle=big_subtitle
                big_text=big_text
            />
        </header>
    }
}
