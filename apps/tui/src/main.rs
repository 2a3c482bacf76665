mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::{App, AppActions};
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use econ_dash::config::AppConfig;
use econ_dash::logging;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::load()?;

    // Logging is best effort; the dashboard still works without a log file
    if let Err(e) = logging::init(&config.log_dir, args.debug) {
        if args.headless || !is_terminal() {
            eprintln!("Logging disabled: {e}");
        }
    }
    info!(?config, "configuration loaded");

    if args.headless || !is_terminal() {
        return event::run_headless(&config, args.indicator, args.json).await;
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let actions = AppActions::new(&config, tx)?;
    let mut app = App::new(actions, args.indicator, config.chart_window);
    app.select_indicator(args.indicator);

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app, &mut rx);

    terminal::cleanup_terminal_state(true, true);

    if let Err(e) = &result {
        error!("event loop exited with error: {e}");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
