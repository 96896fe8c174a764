//! site-render - turns marketing site content files into static HTML pages.
//!
//! ```text
//! site-render hackathon --content content/hackathon/index.md --out public/hackathon.html
//! site-render section todo-list --content content/roadmap.yaml --out preview.html --theme dark
//! site-render check --content content/usability.json --kind usability
//! ```

mod args;
mod config;
mod content;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use args::{Args, Command};
use config::SiteConfig;

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for `check` results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("site-render v{}", env!("CARGO_PKG_VERSION"));
    let config = SiteConfig::load_from_path(&args.config);

    match args.command {
        Command::Hackathon { content, out } => render::hackathon(&config, &content, &out),
        Command::Section {
            kind,
            content,
            out,
            theme,
        } => render::section(&config, kind, &content, &out, theme.into()),
        Command::Check { content, kind } => render::check(kind, &content),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[site-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
