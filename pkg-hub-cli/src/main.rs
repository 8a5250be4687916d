//! pkg-hub CLI
//!
//! Command-line interface for browsing a package catalog one page at a time.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Target;
use log::Log;

mod cli_types;
mod commands;
mod display;
mod error;
mod nav;
mod params;
mod settings;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let settings = settings::load_settings();

    let result = match cli.command {
        Commands::Search(args) => commands::search::run_search(args, &settings),
        Commands::Languages => {
            commands::languages::run_languages();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&settings);
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the logger used for all user-facing output.
///
/// Info lines are printed bare on stdout so `log::info!` doubles as normal
/// output. Warnings and errors go to stderr and keep stdout machine-readable.
/// `RUST_LOG` still overrides the level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let stdout = log_builder(level, verbose, Target::Stdout).build();
    let stderr = log_builder(level, verbose, Target::Stderr).build();
    let max_level = stdout.filter().max(stderr.filter());

    if log::set_boxed_logger(Box::new(SplitLogger { stdout, stderr })).is_ok() {
        log::set_max_level(max_level);
    }
}

fn log_builder(level: log::LevelFilter, verbose: bool, target: Target) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(target)
        .format(move |buf, record| {
            if verbose {
                return writeln!(
                    buf,
                    "{} {:<5} {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.args()
                );
            }
            match record.level() {
                log::Level::Info => writeln!(buf, "{}", record.args()),
                log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
                log::Level::Error => writeln!(buf, "error: {}", record.args()),
                level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
            }
        });
    builder
}

/// Sends `Warn` and `Error` records to stderr, the rest to stdout.
struct SplitLogger {
    stdout: env_logger::Logger,
    stderr: env_logger::Logger,
}

impl SplitLogger {
    fn route(&self, level: log::Level) -> &env_logger::Logger {
        if level <= log::Level::Warn {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.route(metadata.level()).enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        self.route(record.level()).log(record);
    }

    fn flush(&self) {
        self.stdout.flush();
        self.stderr.flush();
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
