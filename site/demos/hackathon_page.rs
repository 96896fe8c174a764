//! Hackathon page rendering example.
//!
//! Run with: `cargo run --example hackathon_page`

use site_leptos::types::{
    HackathonInfoContent, HackathonIntroContent, HackathonLandingContent, HackathonPageContent,
    IdeasAndTracks, LinkDescriptor, ParticipantsInfo, Prerequisites, Schedule, TrackContent,
};
use site_leptos::{render_hackathon_page, DocumentMeta, PageAssets};

fn main() {
    let content = HackathonPageContent {
        landing: HackathonLandingContent {
            tagline: "Four weeks to build on a sharded UTXO chain".into(),
            title: "Alephium Hackathon".into(),
            date: "March 2022".into(),
        },
        intro: HackathonIntroContent {
            title: "Build with us".into(),
            subtitle: "Online, open to everyone".into(),
            description: "Bring an idea, find a team, ship a dApp.".into(),
        },
        info: HackathonInfoContent {
            participants_info: ParticipantsInfo {
                title: "Who can join".into(),
                description: "Developers, designers and tinkerers.".into(),
                link: LinkDescriptor::new("https://alephium.org/hackathon/register", "Register")
                    .in_new_tab(),
            },
            prerequisites: Prerequisites {
                title: "What you need".into(),
                description: "A laptop and some curiosity.".into(),
                skills: vec!["Ralph".into(), "TypeScript".into()],
                link: LinkDescriptor::new("https://docs.alephium.org", "Read the docs").in_new_tab(),
            },
            schedule: Schedule {
                title: "Schedule".into(),
                description: "All times UTC".into(),
                events: vec!["Kick-off".into(), "Mentoring week".into(), "Demo day".into()],
            },
            ideas_and_tracks: IdeasAndTracks {
                title: "Ideas and tracks".into(),
                subtitle: "Pick one or mix them".into(),
                tracks: vec![
                    TrackContent {
                        title: "DeFi".into(),
                        description: "DEXes, lending, stablecoins".into(),
                    },
                    TrackContent {
                        title: "Tooling".into(),
                        description: "SDKs, explorers, wallets".into(),
                    },
                ],
            },
        },
    };

    let html = render_hackathon_page(&content, &PageAssets::default(), &DocumentMeta::default());

    let output_path = "hackathon.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
