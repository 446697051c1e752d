use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zcalc::config::Config;
use zcalc::ui::{Calculator, OutputFormat, press_tokens, render, run_lines};

/// Press calculator buttons and print the display.
///
/// Buttons are written as `type[:value]`: `digit:7`, `digit:.`,
/// `operation:+`, `operation:X`, `clear`, `delete`, `evaluate`.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Args {
    /// Buttons to press in order. Reads lines from stdin when omitted.
    buttons: Vec<String>,

    /// Print the display as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard.
    ///
    /// On Linux this waits until another application takes over the
    /// clipboard before exiting, since the contents vanish with the process.
    #[arg(long)]
    copy: bool,

    /// Path to a config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match Config::source_path(args.config.as_deref()) {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut calc = Calculator::with_config(&config);
    let mut stdout = io::stdout().lock();

    if args.buttons.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Reading button presses from stdin (e.g. `digit:3 operation:+ digit:4 evaluate`)");
        }
        run_lines(&mut calc, stdin.lock(), &mut stdout, format)?;
    } else {
        press_tokens(&mut calc, args.buttons.iter().map(String::as_str));
        render(&calc.display(), format, &mut stdout)?;
    }

    if args.copy {
        calc.copy_result(true);
    }

    Ok(())
}
