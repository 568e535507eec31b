//! CLI entry point for flatrepo

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use flatrepo::{FlattenConfig, flatten};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flatrepo")]
#[command(about = "Flatten a repository into a single Markdown document")]
#[command(version)]
struct Args {
    /// Root directory to flatten
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            process::exit(0);
        }
        Err(_) => {
            // Usage errors go to stdout with a non-zero exit.
            println!("{}", Args::command().render_usage());
            process::exit(1);
        }
    };

    let root = match args.path.canonicalize() {
        Ok(root) => root,
        Err(err) => {
            eprintln!("flatrepo: cannot access '{}': {}", args.path.display(), err);
            process::exit(1);
        }
    };

    let config = FlattenConfig::new(root);
    match flatten(&config) {
        Ok(_) => print_confirmation(&config, should_use_color(args.color)),
        Err(err) => {
            eprintln!("flatrepo: error writing output: {}", err);
            process::exit(1);
        }
    }
}

/// Print the confirmation line, naming the artifact and its location.
fn print_confirmation(config: &FlattenConfig, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = write!(stdout, "Wrote {}", config.output_name);
    let _ = stdout.reset();
    let _ = writeln!(stdout, " to {}", config.root.display());
}
