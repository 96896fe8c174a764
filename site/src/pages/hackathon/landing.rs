//! Hackathon landing: photo header with parallax content boxes.

use leptos::prelude::*;

use crate::components::{BrandLogo, ParallaxWrapper};
use crate::motion::LANDING_PARALLAX_SPEED;
use crate::types::HackathonLandingContent;

/// Photo header with the event name on two translucent boxes.
#[component]
pub fn HackathonLandingSection(
    content: HackathonLandingContent,
    #[prop(into)] background_url: String,
) -> impl IntoView {
    let HackathonLandingContent {
        tagline,
        title,
        date,
    } = content;
    let backdrop = format!("background-image: url('{}');", background_url);

    view! {
        <section class="hackathon-landing" style=backdrop>
            <ParallaxWrapper speed=LANDING_PARALLAX_SPEED>
                <div class="landing-content">
                    <div class="landing-box--first">
                        <BrandLogo accent=2 class="landing-logo" />
                        <h2 class="landing-date">{date}</h2>
                        <h1 class="landing-title">{title}</h1>
                    </div>
                    <div class="landing-box--second">
                        <p class="landing-tagline">{tagline}</p>
                    </div>
                </div>
            </ParallaxWrapper>
        </section>
    }
}
