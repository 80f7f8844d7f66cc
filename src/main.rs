use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use connect_four::config::AppConfig;
use connect_four::logging::{self, LogSink};
use connect_four::ui::{App, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Line-oriented game on stdin/stdout
    Console,
    /// Full-screen terminal UI with mouse support
    Tui,
}

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Front end to play with
    #[arg(long, value_enum, default_value = "tui")]
    mode: Mode,

    /// Override the configured UI theme (classic, ocean, contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(theme) = cli.theme {
        if Theme::by_name(&theme).is_none() {
            bail!(
                "unknown theme '{}' (expected one of: {})",
                theme,
                Theme::NAMES.join(", ")
            );
        }
        app_config.tui.theme = theme;
    }

    let sink = match cli.mode {
        Mode::Console => LogSink::FileOrStderr,
        Mode::Tui => LogSink::FileOnly,
    };
    logging::init(&app_config.logging, sink).context("opening log file")?;
    info!(mode = ?cli.mode, "starting");

    match cli.mode {
        Mode::Console => {
            let stdin = io::stdin();
            connect_four::console::run(stdin.lock(), io::stdout(), &app_config.console)
                .context("console game failed")?;
        }
        Mode::Tui => {
            // Validated above or by AppConfig::validate
            let theme = Theme::by_name(&app_config.tui.theme).unwrap_or_default();
            run_tui(App::new(theme, app_config.tui.start_column)).context("terminal UI failed")?;
        }
    }

    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
