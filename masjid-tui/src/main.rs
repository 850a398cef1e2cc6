mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::DashboardConfig;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use masjid_schedule::{calendar, evaluate, format_12h, Timeline};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use time_utils::LocalClock;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Must run before anything spawns a thread.
    let clock = LocalClock::detect();

    let cli = Cli::parse();

    match logging::init(clock.offset()) {
        Ok(path) => tracing::info!(log = %path.display(), "starting masjid-tui"),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }
    if clock.fell_back_to_utc() {
        tracing::warn!("could not determine local UTC offset, using UTC");
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            println!("{}", DashboardConfig::config_path()?.display());
            Ok(())
        }
        Commands::Check => {
            let config = DashboardConfig::load(cli.config.as_deref())?;
            print_check(&config, &clock);
            Ok(())
        }
        Commands::Run => {
            let config = DashboardConfig::load(cli.config.as_deref())?;
            run_dashboard(config, clock).await
        }
    }
}

fn print_check(config: &DashboardConfig, clock: &LocalClock) {
    let now = clock.now();

    println!("{}", config.mosque.name);
    if config.prayers.is_empty() {
        println!("\nNo prayers configured.");
        return;
    }

    println!("\nPrayers:");
    for prayer in &config.prayers {
        println!(
            "  {:<8} adhan {}  iqamah {}",
            prayer.name.to_string(),
            format_12h(prayer.adhan),
            format_12h(prayer.iqamah)
        );
    }

    println!("\nTimeline for {}:", calendar::format_gregorian(now.date()));
    for event in Timeline::build(&config.prayers, now.date()).events() {
        let tomorrow = if event.instant.date() > now.date() {
            " (tomorrow)"
        } else {
            ""
        };
        println!(
            "  {}  {:<8} {}{}",
            format_12h(event.instant.time()),
            event.prayer.to_string(),
            event.kind,
            tomorrow
        );
    }

    let evaluation = evaluate(&config.prayers, now);
    if let (Some(upcoming), Some(countdown)) = (evaluation.upcoming, evaluation.countdown()) {
        println!(
            "\nNext: {} {} in {} ({:.0}% of interval elapsed)",
            upcoming.prayer,
            upcoming.kind,
            countdown,
            evaluation.progress * 100.0
        );
    }
}

async fn run_dashboard(config: DashboardConfig, clock: LocalClock) -> Result<()> {
    let mut app = App::new(config, clock.now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, clock).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "dashboard failed");
        return Err(err);
    }

    Ok(())
}
