use crate::config::Config;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

mod app;
mod config;
mod render;
mod view;
mod widget;

/// Tap to rotate a bar open and slide it down, one palette color at a time.
#[derive(Parser)]
#[command(version, about = "Run the bar-rotate-down animation in the terminal")]
struct Cli {
    /// The path to the configuration file.
    #[clap(short, long, env = "BARROTDOWN_CONFIG")]
    config: Option<PathBuf>,

    /// Milliseconds between animation frames, overriding the configuration.
    #[clap(long)]
    delay: Option<u64>,

    /// Fraction of a leg covered per frame, overriding the configuration.
    #[clap(long)]
    step: Option<f32>,

    /// Write logs to this file.
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// The minimum level of the log lines written.
    #[clap(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Run off-screen and print the final frame instead of taking over the terminal.
    #[clap(long)]
    headless: bool,

    /// The number of taps to apply when running headless.
    #[clap(long, default_value_t = 1, requires = "headless")]
    taps: usize,

    /// The raster width when running headless.
    #[clap(long, default_value_t = 48, requires = "headless")]
    width: usize,

    /// The raster height when running headless.
    #[clap(long, default_value_t = 24, requires = "headless")]
    height: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Logs go to `log_file` if given. Otherwise they go to stderr when running headless and nowhere
/// when the terminal is taken over, as they would garble the screen.
fn init_logging(log_file: Option<&Path>, level: LogLevel, headless: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(LevelFilter::from(level));
    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if headless => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let (mut config, path) = Config::resolve(cli.config.as_deref())?;
    match path {
        Some(path) => info!("loaded config from '{}'", path.display()),
        None => info!("no config file found, using defaults"),
    }
    if let Some(delay) = cli.delay {
        config.frame_delay_ms = delay;
    }
    if let Some(step) = cli.step {
        config.step = step;
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.log_file.as_deref(), cli.log_level, cli.headless)?;
    let config = load_config(&cli)?;
    let settings = config.settings().context("invalid settings")?;
    if cli.headless {
        app::run_headless(settings, cli.width, cli.height, cli.taps, &mut io::stdout().lock())
    } else {
        app::run_interactive(settings)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
