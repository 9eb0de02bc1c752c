#![forbid(unsafe_code)]

mod animation;
mod config;
mod constants;
mod contact;
mod content;
mod gui;
mod projects;
mod toast;
mod visibility;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::{Config, ThemeMode};
use content::Portfolio;

/// Single-page portfolio viewer
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// URL of the remote project list (JSON array)
    #[arg(long, value_name = "URL")]
    projects_url: Option<String>,

    /// Initial theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// `--log-level`, then `LOG_LEVEL`, then the config file
fn resolve_level(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> TraceLevel {
    parse_level(cli.or(env).or(config).unwrap_or("info"))
}

/// Peek at the config's log level before the subscriber exists
fn configured_level(path: Option<&PathBuf>) -> Option<String> {
    let path = path.cloned().unwrap_or_else(Config::path);
    let contents = std::fs::read_to_string(path).ok()?;
    let value: toml::Value = toml::from_str(&contents).ok()?;
    value.get("log_level")?.as_str().map(str::to_string)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_level = std::env::var(constants::env::LOG_LEVEL).ok();
    let log_level = resolve_level(
        cli.log_level.as_deref(),
        env_level.as_deref(),
        configured_level(cli.config.as_ref()).as_deref(),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    config.apply_cli_overrides(cli.projects_url, cli.theme);
    info!(
        projects_url = %config.projects_url,
        theme = %config.theme,
        section_threshold = config.section_threshold,
        stagger_threshold = config.stagger_threshold,
        "config resolved"
    );

    let portfolio = Portfolio::load(config.content_path.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("folio-io")
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    gui::run_gui(config, portfolio, runtime.handle().clone())
}
