//! E20 simulator CLI.
//!
//! Loads a machine-code listing, runs it until the program jumps to itself, and
//! prints the final state to stdout. Every failure (bad arguments, unreadable
//! file, malformed listing) prints a diagnostic to stderr and exits with
//! status 1. Set `RUST_LOG=debug` for load, halt, and statistics events on
//! stderr.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use e20_core::Simulator;
use e20_core::config::Config;

#[derive(Parser, Debug)]
#[command(name = "sim", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Show this help message and exit.
    #[arg(short, long)]
    help: bool,

    /// The file containing machine code, typically with .bin suffix.
    filename: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args_os();
    let prog = args
        .next()
        .map_or_else(|| "sim".to_string(), |arg| arg.to_string_lossy().into_owned());

    if args.any(|arg| is_unknown_option(&arg)) {
        print_usage(&prog);
        return ExitCode::FAILURE;
    }

    let filename = match Cli::try_parse() {
        Ok(Cli {
            help: false,
            filename: Some(filename),
        }) => filename,
        Ok(_) | Err(_) => {
            print_usage(&prog);
            return ExitCode::FAILURE;
        }
    };

    match run(&filename) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

/// Loads, runs, and reports. Returns the diagnostic to print on failure.
fn run(filename: &Path) -> Result<(), String> {
    let mut sim = Simulator::from_file(filename, Config::default()).map_err(|e| e.to_string())?;
    debug!(file = %filename.display(), "starting simulation");

    let _ = sim.run();

    let mut out = std::io::stdout().lock();
    write!(out, "{}", sim.report()).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}

/// Any argument starting with `-` other than `-h`/`--help`, including a bare
/// `-` and the `--` separator, is an unknown option.
fn is_unknown_option(arg: &OsStr) -> bool {
    let arg = arg.to_string_lossy();
    arg.starts_with('-') && arg != "-h" && arg != "--help"
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_usage(prog: &str) {
    eprintln!("usage {prog} [-h] filename");
    eprintln!();
    eprintln!("Simulate E20 machine");
    eprintln!();
    eprintln!("positional arguments:");
    eprintln!("  filename    The file containing machine code, typically with .bin suffix");
    eprintln!();
    eprintln!("optional arguments:");
    eprintln!("  -h, --help  show this help message and exit");
}
