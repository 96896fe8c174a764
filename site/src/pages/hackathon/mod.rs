//! Hackathon event page.
//!
//! Always dark, always the same order: landing, intro, info, with a divider
//! between each.

mod info;
mod intro;
mod landing;

use leptos::prelude::*;

use crate::components::{SectionDivider, ThemeProvider};
use crate::theme::Theme;
use crate::types::HackathonPageContent;
use crate::PageAssets;

pub use info::HackathonInfoSection;
pub use intro::HackathonIntroSection;
pub use landing::HackathonLandingSection;

/// Page body of the hackathon page.
#[component]
pub fn HackathonPage(content: HackathonPageContent, assets: PageAssets) -> impl IntoView {
    let HackathonPageContent {
        landing,
        intro,
        info,
    } = content;

    view! {
        <ThemeProvider theme=Theme::dark()>
            <div class="text-page">
                <HackathonLandingSection content=landing background_url=assets.hackathon_background />
                <SectionDivider />
                <HackathonIntroSection content=intro />
                <SectionDivider />
                <HackathonInfoSection content=info />
            </div>
        </ThemeProvider>
    }
}
