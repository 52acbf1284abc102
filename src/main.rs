#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{ConfigBuilder, WriteLogger};

use contact_form::config::{Config, Overrides};
use contact_form::tui::App;

#[derive(Parser)]
#[command(name = "contact-form", about = "Terminal contact form with inline validation")]
struct Args {
    /// Config file (defaults to <config dir>/contact-form/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Print the last submitted values as JSON on exit
    #[arg(long)]
    print_json: bool,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let overrides = Overrides {
        log_level: args.log_level,
        log_file: args.log_file,
        print_json: args.print_json,
    };
    let config = Config::load(args.config.as_deref(), &overrides)?;
    init_logging(&config)?;
    log::info!("contact-form starting: {config:?}");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    result?;
    restore_result?;

    if config.print_json
        && let Some(json) = app.last_submitted_json()?
    {
        println!("{json}");
    }
    Ok(())
}

/// Starts the file logger. A TUI owns the terminal, so logs only ever go to a file.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(config.log_level, log_config, file)?;
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
