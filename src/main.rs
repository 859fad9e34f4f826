use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use midlang::run_with_stdio;
use tracing::level_filters::LevelFilter;

/// midlang runs a script of variable declarations, assignments, print
/// statements and console input expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Raises the diagnostic log level on stderr (-v info, -vv debug, -vvv
    /// trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path of the source file to run.
    path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read the input file '{}': {e}",
                      args.path.display());
            return ExitCode::FAILURE;
        },
    };
    tracing::info!(path = %args.path.display(), bytes = source.len(), "running script");

    if let Err(e) = run_with_stdio(&source) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Installs the stderr log subscriber. Only warnings are shown by default.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}
