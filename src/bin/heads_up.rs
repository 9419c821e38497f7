use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use heads_up_holdem::config::GameConfig;
use heads_up_holdem::tui::{app::AppState, controller};
use log::LevelFilter;
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// The TUI owns the terminal, so logs only go to a file when `HEADS_UP_LOG` names one.
fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os("HEADS_UP_LOG") else {
        return Ok(());
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(LevelFilter::Debug, config, File::create(path)?)
        .map_err(io::Error::other)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "heads-up TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            heads_up_holdem::VERSION
        );
        return Ok(());
    }
    init_logging()?;

    let mut config = GameConfig::default();
    if let Some(seed) = std::env::var("HEADS_UP_SEED").ok().and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }
    let mut app = AppState::new(config, AppState::DEFAULT_REVEAL_DELAY_MS).map_err(io::Error::other)?;

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
