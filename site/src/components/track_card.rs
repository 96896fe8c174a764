//! Track card for event pages.

use leptos::prelude::*;

use super::{class_list, Card};

/// Card with thick borders in the page background color, so it reads as a
/// tile cut out of the secondary surface.
#[component]
pub fn TrackCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Artwork shown above the text
    #[prop(optional, into)]
    illustration: Option<ViewFn>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = class_list([("track-card", true), (class.as_str(), true)]);

    view! {
        <Card
            class=class
            border_color="var(--theme-bg-primary)"
            bg_color="var(--theme-bg-secondary)"
            thick_borders=true
        >
            {illustration.map(|illustration| illustration.run())}
            <div class="track-card__text">
                <h3>{title}</h3>
                <p>{description}</p>
            </div>
        </Card>
    }
}
