//! Call-to-action affordances.
//!
//! Both components take a [`LinkDescriptor`]; `new_tab` maps to
//! `target="_blank"` with `rel="noopener noreferrer"`, otherwise the link
//! navigates in place and carries neither attribute.

use leptos::prelude::*;

use super::{class_list, Icon, ICON_ARROW_RIGHT};
use crate::types::LinkDescriptor;

/// Text link followed by an arrow.
#[component]
pub fn ArrowedLink(link: LinkDescriptor, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = link.target();
    let rel = link.rel();
    let class = class_list([("arrowed-link", true), (class.as_str(), true)]);

    view! {
        <a class=class href=link.url target=target rel=rel>
            <span>{link.text}</span>
            <Icon path=ICON_ARROW_RIGHT size="16" class="arrowed-link__arrow" />
        </a>
    }
}

/// Pill-shaped button link.
#[component]
pub fn Button(link: LinkDescriptor, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = link.target();
    let rel = link.rel();
    let class = class_list([("button", true), (class.as_str(), true)]);

    view! {
        <a class=class href=link.url target=target rel=rel>
            {link.text}
        </a>
    }
}
