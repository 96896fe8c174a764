//! Hackathon intro: centered header and pitch text.

use leptos::prelude::*;

use crate::components::{PageSectionContainer, SectionTextHeader};
use crate::types::HackathonIntroContent;

/// Centered header and pitch text.
#[component]
pub fn HackathonIntroSection(content: HackathonIntroContent) -> impl IntoView {
    view! {
        <section class="hackathon-intro">
            <PageSectionContainer>
                <SectionTextHeader
                    title=content.title
                    subtitle=content.subtitle
                    centered=true
                    big_subtitle=true
                />
                <p class="hackathon-intro__text">{content.description}</p>
            </PageSectionContainer>
        </section>
    }
}
