// calctty: keypad calculator for the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use calctty::config::Settings;
use calctty::engine::calculator::Calculator;
use calctty::engine::script::{parse_script, run_script};
use calctty::logging::{self, Fallback};
use calctty::ui::{App, Keymap};

#[derive(Debug, Parser)]
#[command(name = "calctty", version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (overrides the config's default level)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Press the given keys headlessly and print the display, e.g. "7 + 3 ="
    #[arg(short, long, value_name = "KEYS")]
    eval: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        settings.logging.file = Some(file);
    }

    let fallback = if cli.eval.is_some() {
        Fallback::Stderr
    } else {
        Fallback::Discard
    };
    logging::init(&settings.logging, fallback)?;

    let mut calculator = Calculator::with_constant_mode(settings.engine.constant_entry);

    if let Some(script) = cli.eval {
        let symbols = match parse_script(&script) {
            Ok(symbols) => symbols,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        info!(count = symbols.len(), "running script");

        let display = run_script(&mut calculator, &symbols);
        let expression = display.expression_line();
        if !expression.is_empty() {
            println!("{}", expression);
        }
        println!("{}", display.current);
        return Ok(());
    }

    let keymap = match Keymap::with_overrides(&settings.keys) {
        Ok(keymap) => keymap,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator, keymap);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
