use std::fs::{self, OpenOptions};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use log::LevelFilter;
use ratatui::DefaultTerminal;

use podsuggest::app::App;
use podsuggest::config::{self, ConfigResult, Overrides};
use podsuggest::suggest::{HttpSearchSource, spawn_worker};

const LOG_FILE: &str = "debug.log";

/// Search the episode catalogue with live suggestions
#[derive(Parser, Debug)]
#[command(name = "podsuggest", version, about)]
struct Cli {
    /// Episode API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (default: ~/.config/podsuggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quiet period after typing before suggestions are fetched
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Write debug logs
    #[arg(long)]
    debug: bool,

    /// Log file (default: ~/.config/podsuggest/debug.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            debounce_ms: self.debounce_ms,
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli)?;

    let ConfigResult { config, warning } = config::load_config(cli.config.as_deref());
    let config = config.with_overrides(&cli.overrides());

    let source = HttpSearchSource::new(&config.api)?;
    let (job_tx, job_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(Arc::new(source), job_rx, response_tx)?;

    let mut app = App::new(&config);
    app.warning = warning;
    app.set_channels(job_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableMouseCapture, EnableFocusChange) {
        log::warn!("Failed to enable mouse capture: {}", e);
    }

    let result = run(terminal, &mut app);

    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    // Closing the job channel lets the worker drain and exit
    drop(app);
    if worker.join().is_err() {
        log::warn!("Fetch worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(app.poll_timeout(Instant::now()))?;
        if app.should_quit() {
            break;
        }

        app.tick(Instant::now());
    }

    Ok(())
}

/// File logging, enabled by `--debug` or `RUST_LOG`
///
/// The TUI owns stdout and stderr, so records go to a file.
fn init_logging(cli: &Cli) -> Result<()> {
    if !cli.debug && std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => config::config_dir()
            .ok_or_else(|| eyre!("Cannot locate home directory for the debug log"))?
            .join(LOG_FILE),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let default_level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    log::debug!("Logging to {}", path.display());
    Ok(())
}
