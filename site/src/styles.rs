//! CSS for the site pages.
//!
//! Two layers, both inlined into every document by
//! [`crate::components::PageDocument`]:
//!
//! - [`GLOBAL_CSS`] - reset, spacing/typography scale, breakpoints
//! - [`SITE_CSS`] - component styles, reading colors only through the
//!   `--theme-*` custom properties published by
//!   [`crate::components::ThemeProvider`]
//!
//! # Customization
//!
//! ```rust
//! use site_leptos::styles::SITE_CSS;
//!
//! let my_css = ".grid-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("border-radius: 0; }"));
//! ```
//!
//! Breakpoints: `mobile` is `max-width: 800px`, `smallMobile` is
//! `max-width: 600px`.

/// Reset and design tokens shared by every page.
pub const GLOBAL_CSS: &str = r#"
:root {
    --spacing-2: 8px;
    --spacing-3: 12px;
    --spacing-4: 16px;
    --spacing-6: 24px;
    --spacing-8: 32px;
    --spacing-10: 40px;
    --spacing-14: 56px;
    --spacing-16: 64px;
    --spacing-20: 80px;
    --spacing-24: 96px;
    --spacing-28: 112px;
    --fontSize-22: 22px;
    --fontSize-24: 24px;
    --fontSize-28: 28px;
    --fontSize-50: 50px;
    --fontWeight-bold: 700;
    --width-476: 476px;
    --page-width: 1120px;
    --color-grey-300: #a3a3a8;
    --color-grey-dark-2: #3a3a3f;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4, p, ul, ol {
    margin: 0;
}

img, picture, svg {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}
"#;

/// Component styles.
pub const SITE_CSS: &str = r#"
/* Theme scope */
.theme-scope {
    background-color: var(--theme-bg-primary);
    color: var(--theme-text-primary);
    min-height: 100vh;
}

/* Text-focused pages */
.text-page {
    font-size: 18px;
    line-height: 24px;
}

.text-page h3 {
    margin-top: var(--spacing-6);
    font-size: 28px;
}

.text-page p {
    opacity: 0.8;
}

/* Layout */
.section-container {
    position: relative;
    max-width: var(--page-width);
    margin: 0 auto;
    padding: 0 var(--spacing-6);
}

.section-divider {
    height: 1px;
    margin: var(--spacing-16) auto;
    max-width: var(--page-width);
    border: 0;
    background-color: var(--theme-border-primary);
}

/* Text */
.text-snippet h1, .text-snippet h2, .text-snippet h3 {
    color: var(--theme-text-primary);
}

.text-snippet .subtitle {
    color: var(--theme-text-secondary);
}

.text-snippet.big-subtitle .subtitle {
    font-size: var(--fontSize-24);
}

.text-snippet.big-text .text-snippet__body {
    font-size: 20px;
    line-height: 30px;
}

.section-text-header {
    position: relative;
    z-index: 1;
    max-width: var(--page-width);
    margin: 0 auto;
    padding: 0 var(--spacing-6);
}

.section-text-header.centered {
    text-align: center;
}

/* Links */
.arrowed-link {
    display: inline-flex;
    align-items: center;
    gap: var(--spacing-2);
    font-weight: 600;
    color: var(--theme-text-primary);
}

.arrowed-link:hover .arrowed-link__arrow {
    transform: translateX(4px);
}

.arrowed-link__arrow {
    display: inline-block;
    transition: transform 0.2s ease;
}

.button {
    display: inline-block;
    padding: var(--spacing-3) var(--spacing-8);
    border-radius: 100px;
    font-weight: 600;
    background-color: var(--theme-text-primary);
    color: var(--theme-bg-primary);
}

/* Cards */
.card {
    display: flex;
    flex-direction: column;
    padding: var(--spacing-8);
    border-radius: 9px;
    border: 1px solid var(--theme-border-primary);
    background-color: var(--theme-bg-primary);
}

.card--thick-borders {
    border-width: 10px;
}

.grid-card {
    position: relative;
    overflow: hidden;
}

.grid-card__contents {
    display: flex;
    flex: 1;
    justify-content: space-between;
    height: 100%;
}

.grid-card__contents article {
    width: 65%;
    padding-right: var(--spacing-4);
    z-index: 1;
}

.grid-card__text h3 {
    margin-bottom: var(--spacing-2);
}

.grid-card__text--no-subtitle h3 {
    margin-bottom: var(--spacing-6);
}

.grid-card__text .text-snippet__body {
    margin-bottom: var(--spacing-10);
    color: var(--theme-text-tertiary);
}

.grid-card__text .subtitle {
    margin-bottom: var(--spacing-10);
    color: var(--theme-text-secondary);
}

.track-card {
    padding: var(--spacing-2) var(--spacing-4);
}

.track-card__text {
    border-top: 1px solid var(--theme-border-primary);
}

/* Numbers */
.numbers-info {
    font-weight: var(--fontWeight-bold);
    color: var(--color-grey-dark-2);
}

.numbers-info__number {
    font-size: var(--fontSize-50);
    margin-bottom: var(--spacing-3);
}

.numbers-info__description {
    font-size: var(--fontSize-22);
}

.numbers-grid {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-around;
    gap: var(--spacing-10);
    padding: var(--spacing-16) 0;
}

/* Todo lists */
.todo-section {
    background-repeat: no-repeat;
    background-position-x: center;
    margin: var(--spacing-16) 0;
}

.todo-lists {
    display: flex;
    gap: min(10vw, 100px);
    margin-top: 70px;
}

.todo-list {
    display: flex;
    flex-direction: column;
    width: 50%;
}

.todo-title {
    margin-bottom: 45px;
}

.align-right {
    text-align: right;
}

.align-left {
    text-align: left;
}

.todo-items {
    display: flex;
    flex-wrap: wrap;
    gap: 20px;
}

.todo-items.align-right {
    justify-content: flex-end;
}

.todo-items.align-left {
    justify-content: flex-start;
}

.todo-item {
    display: flex;
    flex-direction: column;
    justify-content: center;
    position: relative;
    width: calc(50% - 30px - 20px);
    min-width: 199px;
    padding: 15px;
    padding-bottom: 30px;
    text-align: left;
    background-color: var(--theme-bg-primary);
    border-radius: 12px;
    border: 1px solid var(--theme-border-primary);
    box-shadow: 0px 10px 20px rgba(0, 0, 0, 0.2);
}

.todo-label {
    position: absolute;
    bottom: 2px;
    right: 2px;
    padding: 4px 6px;
    border-radius: 30px;
    font-size: 11px;
    opacity: 0.3;
}

.todo-item:hover .todo-label {
    opacity: 0.8;
}

.todo-check {
    position: absolute;
    top: 8px;
    right: 8px;
    width: 32px;
    height: 32px;
    color: #27ae60;
}

.todo-content {
    font-weight: 500;
    font-size: 16px;
    line-height: 25px;
    color: var(--theme-text-primary);
}

.todo-content.complete {
    color: var(--color-grey-300);
}

/* One-shot reveal (armed by the motion script) */
.reveal-armed, .reveal-armed [data-reveal-item] {
    transition: opacity 0.4s ease;
}

.reveal-armed:not(.revealed), .reveal-armed:not(.revealed) [data-reveal-item] {
    opacity: 0;
}

/* Usability */
.usability-section {
    position: relative;
    padding-top: var(--spacing-28);
    padding-bottom: var(--spacing-28);
    background-color: var(--theme-bg-primary);
    color: var(--theme-text-primary);
}

.usability-header {
    margin-bottom: var(--spacing-10);
}

.usability-container {
    z-index: 1;
}

.usability-centered {
    text-align: center;
    max-width: var(--width-476);
    margin: auto;
}

.usability-centered .button {
    margin: var(--spacing-8) auto 0;
}

.usability-description {
    color: var(--theme-text-tertiary);
}

.usability-images {
    margin-top: var(--spacing-20);
    display: grid;
    grid-template-columns: 1fr 1fr;
    grid-gap: var(--spacing-4);
}

.usability-image {
    display: flex;
    justify-content: center;
}

.usability-image--wide {
    grid-column: 1 / span 2;
}

.usability-birds {
    position: absolute;
    top: var(--spacing-24);
    height: auto;
    pointer-events: none;
}

.usability-mountains {
    position: absolute;
    height: auto;
    width: auto;
    bottom: -2px;
    left: 0;
    right: 0;
    pointer-events: none;
}

/* Responsive image */
.responsive-image {
    border-radius: 7px;
    border: 1px solid var(--theme-border-primary);
    overflow: hidden;
}

.responsive-image__picture {
    display: flex;
}

.responsive-image img {
    height: 100%;
    max-width: none;
    width: 100%;
    object-fit: cover;
}

/* Brand */
.brand-logo {
    color: var(--theme-text-primary);
}

.brand-logo--1 { color: #ff5d51; }
.brand-logo--2 { color: #ffc857; }
.brand-logo--3 { color: #6c83ff; }

/* Hackathon landing */
.hackathon-landing {
    position: relative;
    background-size: cover;
    background-position: center;
    height: calc(max(50vh, 300px));
    max-height: 400px;
    display: flex;
    align-items: flex-end;
}

.landing-content {
    margin-bottom: -12%;
    margin-left: var(--spacing-14);
    margin-right: var(--spacing-14);
}

.landing-box--first {
    padding: 5vh calc(max(3vw, 30px));
    background-color: var(--theme-bg-tertiary-70, var(--theme-bg-tertiary));
    backdrop-filter: blur(20px);
    max-height: 300px;
}

.landing-box--second {
    padding: 2vh 3vw;
    background-color: var(--theme-bg-primary-30, var(--theme-bg-primary));
    backdrop-filter: blur(20px);
    max-height: 150px;
}

.landing-logo {
    height: 10vh;
    min-height: 80px;
    width: auto;
}

.landing-date {
    color: var(--theme-text-highlight);
    font-size: var(--fontSize-28);
}

.landing-title {
    color: var(--theme-text-primary);
    font-size: var(--fontSize-50);
    margin-top: 10px;
}

.landing-tagline {
    color: var(--theme-text-secondary);
    font-size: var(--fontSize-24);
    max-width: 500px;
}

/* Hackathon info */
.hackathon-intro {
    padding-top: var(--spacing-28);
}

.hackathon-intro__text {
    max-width: 720px;
    margin: var(--spacing-8) auto 0;
    text-align: center;
}

.info-cards {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: var(--spacing-6);
}

.skills, .schedule-events {
    padding-left: var(--spacing-6);
}

.schedule {
    margin-top: var(--spacing-16);
}

.tracks {
    margin-top: var(--spacing-16);
    padding-bottom: var(--spacing-28);
}

.tracks-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: var(--spacing-6);
    margin-top: var(--spacing-10);
}

@media (max-width: 800px) {
    .todo-list {
        align-items: center;
    }

    .todo-item {
        flex: 1;
        width: auto;
    }

    .usability-section {
        padding-bottom: 0;
    }

    .usability-images {
        grid-template-columns: 1fr;
    }

    .usability-image--wide {
        grid-column: 1 / span 1;
    }

    .usability-mountains {
        bottom: -152px;
    }

    .info-cards {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 600px) {
    .todo-lists {
        flex-direction: column;
        align-items: center;
        gap: 70px;
    }

    .usability-mountains {
        bottom: -80px;
    }
}

@media (prefers-reduced-motion: reduce) {
    .reveal-armed, .reveal-armed [data-reveal-item] {
        transition: none;
    }
}
"#;

/// Content Security Policy for generated pages: inline styles and scripts
/// only, images from anywhere over https.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data: https:;";
