//! Hackathon info: participation cards, schedule and tracks.

use leptos::prelude::*;

use crate::components::{GridCard, PageSectionContainer, SectionTextHeader, TextSnippet, TrackCard};
use crate::types::{HackathonInfoContent, IdeasAndTracks, ParticipantsInfo, Prerequisites, Schedule};

/// Who, what, when and which tracks.
#[component]
pub fn HackathonInfoSection(content: HackathonInfoContent) -> impl IntoView {
    let HackathonInfoContent {
        participants_info,
        prerequisites,
        schedule,
        ideas_and_tracks,
    } = content;

    view! {
        <section class="hackathon-info">
            <PageSectionContainer>
                <div class="info-cards">
                    <ParticipantsCard info=participants_info />
                    <PrerequisitesCard prerequisites=prerequisites />
                </div>
                <ScheduleBlock schedule=schedule />
                <TracksBlock tracks=ideas_and_tracks />
            </PageSectionContainer>
        </section>
    }
}

#[component]
fn ParticipantsCard(info: ParticipantsInfo) -> impl IntoView {
    view! { <GridCard title=info.title subtitle=info.description link=info.link /> }
}

#[component]
fn PrerequisitesCard(prerequisites: Prerequisites) -> impl IntoView {
    let Prerequisites {
        title,
        description,
        skills,
        link,
    } = prerequisites;

    view! {
        <GridCard title=title subtitle=description link=link>
            <ul class="skills">
                {skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect::<Vec<_>>()}
            </ul>
        </GridCard>
    }
}

#[component]
fn ScheduleBlock(schedule: Schedule) -> impl IntoView {
    let Schedule {
        title,
        description,
        events,
    } = schedule;

    view! {
        <div class="schedule">
            <TextSnippet title=title subtitle=description big_subtitle=true>
                <ol class="schedule-events">
                    {events.into_iter().map(|event| view! { <li>{event}</li> }).collect::<Vec<_>>()}
                </ol>
            </TextSnippet>
        </div>
    }
}

#[component]
fn TracksBlock(tracks: IdeasAndTracks) -> impl IntoView {
    let IdeasAndTracks {
        title,
        subtitle,
        tracks,
    } = tracks;

    view! {
        <div class="tracks">
            <SectionTextHeader title=title subtitle=subtitle big_subtitle=true />
            <div class="tracks-grid">
                {tracks
                    .into_iter()
                    .map(|track| view! { <TrackCard title=track.title description=track.description /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkDescriptor, TrackContent};
    use leptos::tachys::view::RenderHtml;

    fn content() -> HackathonInfoContent {
        HackathonInfoContent {
            participants_info: ParticipantsInfo {
                title: "Who can join".into(),
                description: "Anyone with an idea".into(),
                link: LinkDescriptor::new("https://forms.example/register", "Register").in_new_tab(),
            },
            prerequisites: Prerequisites {
                title: "Prerequisites".into(),
                description: "Some dApp experience helps".into(),
                skills: vec!["Ralph".into(), "TypeScript".into()],
                link: LinkDescriptor::new("https://docs.alephium.org", "Read the docs").in_new_tab(),
            },
            schedule: Schedule {
                title: "Schedule".into(),
                description: "Four weeks".into(),
                events: vec!["Kick-off".into(), "Demo day".into()],
            },
            ideas_and_tracks: IdeasAndTracks {
                title: "Ideas and tracks".into(),
                subtitle: "Pick a track".into(),
                tracks: vec![
                    TrackContent {
                        title: "DeFi".into(),
                        description: "Lending, DEXes".into(),
                    },
                    TrackContent {
                        title: "Tooling".into(),
                        description: "SDKs and explorers".into(),
                    },
                ],
            },
        }
    }

    #[test]
    fn renders_two_grid_cards_and_one_track_card_per_track() {
        let html = view! { <HackathonInfoSection content=content() /> }.to_html();

        assert_eq!(html.matches("grid-card__contents").count(), 2);
        assert_eq!(html.matches("track-card__text").count(), 2);
        assert!(html.contains("href=\"https://forms.example/register\""));
        assert!(html.contains("href=\"https://docs.alephium.org\""));
    }

    #[test]
    fn skills_and_events_are_listed_in_order() {
        let html = view! { <HackathonInfoSection content=content() /> }.to_html();

        assert!(html.contains("<li>Ralph</li>"));
        assert!(html.contains("<li>TypeScript</li>"));
        let kickoff = html.find("<li>Kick-off</li>").expect("first event");
        let demo = html.find("<li>Demo day</li>").expect("second event");
        assert!(kickoff < demo);
    }
}
