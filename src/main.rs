//! offers-tui - A terminal dashboard for cruise offer listings
//!
//! Browse the offers the extraction pipeline produced: a paginated table
//! with ship-class badges, plus a multi-select filter panel over ship,
//! port, stateroom, offer type, nights, destination and sail-date range.
//! Uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Terminal dashboard for cruise offer listings.
#[derive(Parser)]
#[command(name = "offers-tui", about = "Cruise offers dashboard")]
struct Args {
    /// Offers data file (.json or .csv). Falls back to `data_path` in
    /// ~/.offers-tui/config.json.
    #[arg(value_name = "FILE")]
    data: Option<PathBuf>,

    /// Append logs to this file instead of discarding them. Level is
    /// controlled by RUST_LOG (default: info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Log to a file when asked; the terminal itself belongs to the TUI.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_app(args: &Args, config: &Config) -> App {
    let data_path = args
        .data
        .clone()
        .or_else(|| config.data_path.as_ref().map(PathBuf::from));

    match data_path {
        Some(path) => match services::load_offers(&path) {
            Ok(offers) => App::new(offers, config),
            Err(err) => App::with_error(format!("{:#}", err), config),
        },
        None => App::with_error(
            "No offers data file given.\n\n\
             Pass a path on the command line:\n  offers-tui offers.json\n\n\
             Or set \"data_path\" in ~/.offers-tui/config.json"
                .to_string(),
            config,
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = Config::load().unwrap_or_default();
    let mut app = build_app(&args, &config);
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("draw error: {e}");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action may produce a follow-up action; run the chain dry.
            if let Some(action) = action {
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
