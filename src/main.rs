//! Bistro - a terminal welcome screen that follows the system appearance.

use anyhow::Result;
use bistro::app::App;
use bistro::appearance::Appearance;
use bistro::error::BistroError;
use bistro::ui::{self, hex, Palette};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "BISTRO_LOG";

/// Appearance selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AppearanceArg {
    /// Detect from the terminal.
    Auto,
    /// Force the light appearance.
    Light,
    /// Force the dark appearance.
    Dark,
}

#[derive(Parser, Debug)]
#[command(name = "bistro")]
#[command(about = "A welcome screen that follows the system light/dark appearance", long_about = None)]
struct Args {
    /// Appearance to start with
    #[arg(long, value_enum, default_value_t = AppearanceArg::Auto)]
    appearance: AppearanceArg,

    /// Print the resolved palette and exit
    #[arg(long)]
    print_palette: bool,

    /// Enable logging to specified file (filter with BISTRO_LOG, default debug)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting Bistro");
    }

    let initial = match args.appearance {
        AppearanceArg::Auto => Appearance::detect(),
        AppearanceArg::Light => Appearance::Light,
        AppearanceArg::Dark => Appearance::Dark,
    };
    tracing::info!("Initial appearance: {}", initial);

    if args.print_palette {
        let palette = Palette::resolve(initial);
        println!("appearance={}", initial);
        println!("background={}", hex(palette.background));
        println!("text={}", hex(palette.text));
        println!("accent={}", hex(palette.accent));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().map_err(|e| BistroError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(initial);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Bistro exited");

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| BistroError::log_file(path.to_path_buf(), e))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),

                    // Scrolling
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.scroll_up(),
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.scroll_down(),

                    // Stand-in for an OS appearance notification
                    (KeyModifiers::SHIFT, KeyCode::Char('T'))
                    | (KeyModifiers::NONE, KeyCode::Char('T')) => app.cycle_appearance(),

                    _ => {},
                }
            }
        }

        if app.should_quit {
            app.screen.unmount();
            return Ok(());
        }
    }
}
