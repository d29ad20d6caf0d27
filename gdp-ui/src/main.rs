use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use gdp_ui::config::AppConfig;
use gdp_ui::{AppState, Dashboard, TerminalPresenter, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive GDP calculator.
///
/// Evaluates the six linear component functions, shows the resulting GDP
/// and draws every function's curve. Type `help` at the prompt for commands.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file overriding default parameters and settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `debug`); overrides `RUST_LOG` and the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not draw the historical GDP benchmark chart.
    #[arg(long, default_value_t = false)]
    no_benchmark: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };

    let log = logging::init(config.logging.level.as_deref().unwrap_or("info"))?;
    if let Some(level) = &cli.log_level {
        log.set_level(level)?;
    }
    if !config.logging.terminal {
        log.set_terminal_enabled(false)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        log.log_to_file(path)?;
        debug!(path = %path.display(), "file logging enabled");
    }

    let mut state = AppState::from_config(&config);
    if cli.no_benchmark {
        state.show_benchmark = false;
    }
    info!(show_benchmark = state.show_benchmark, "starting dashboard");

    let mut dashboard = Dashboard::new(state).with_log_control(log);
    let mut presenter = TerminalPresenter::new(io::stdout().lock());

    dashboard
        .render(&mut presenter)
        .context("Failed to write initial render")?;
    dashboard
        .run(io::stdin().lock(), &mut presenter)
        .context("Dashboard session failed")?;

    Ok(())
}
