//! Fixtura CLI — run fixture suites from the command line.
//!
//! Subcommands:
//! - **run**: `fixtura run [FIXTURE] [--filter S] [--fail-fast] [--config PATH]`
//! - **list**: fixtures and their tests, in discovery order
//! - **streams**: the iterator demonstrations
//! - **init**: write a default `fixtura.toml`

mod commands;
mod format;

use std::path::Path;
use std::process;

use fixtura_core::{Error, Result, SuiteReport};
use fixtura_engine::{RunnerConfig, SuiteRunner, CONFIG_FILE_NAME};
use fixtura_samples::{all_fixtures, fixture_by_name, streams};
use tracing::{debug, Level};

use commands::build_cli;
use format::{format_error, format_listing, format_reports, format_streams, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some(("run", sub)) => run_fixtures(sub, output_mode),
        Some(("list", _)) => all_fixtures().map(|fixtures| {
            println!("{}", format_listing(&fixtures, output_mode));
            0
        }),
        Some(("streams", _)) => {
            println!("{}", format_streams(&streams::demonstrations(), output_mode));
            Ok(0)
        }
        Some(("init", _)) => init_config(),
        _ => Ok(2),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn load_config(matches: &clap::ArgMatches) -> Result<RunnerConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => RunnerConfig::from_file(Path::new(path)),
        None => RunnerConfig::load_or_default(Path::new(CONFIG_FILE_NAME)),
    }
}

/// Overlay `--fail-fast` and `--filter` on top of the file config.
fn apply_overrides(config: &mut RunnerConfig, matches: &clap::ArgMatches) {
    if matches.get_flag("fail-fast") {
        config.fail_fast = true;
    }
    if let Some(filter) = matches.get_one::<String>("filter") {
        config.filter = Some(filter.clone());
    }
}

/// Process exit code for a finished run: 0 only if every suite succeeded.
fn exit_code(reports: &[SuiteReport]) -> i32 {
    if reports.iter().all(SuiteReport::is_success) {
        0
    } else {
        1
    }
}

/// Run the selected fixtures with `config` plus the command-line overrides.
fn execute_run(
    matches: &clap::ArgMatches,
    mut config: RunnerConfig,
) -> Result<Vec<SuiteReport>> {
    apply_overrides(&mut config, matches);
    let runner = SuiteRunner::new(config)?;
    debug!(target: "fixtura::cli", config = ?runner.config(), "Effective runner config");

    let fixtures = match matches.get_one::<String>("fixture") {
        Some(name) => vec![fixture_by_name(name)?],
        None => all_fixtures()?,
    };
    Ok(runner.run_all(&fixtures))
}

fn run_fixtures(matches: &clap::ArgMatches, mode: OutputMode) -> Result<i32> {
    let reports = execute_run(matches, load_config(matches)?)?;
    println!("{}", format_reports(&reports, mode));
    Ok(exit_code(&reports))
}

fn init_config() -> Result<i32> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::Config(format!(
            "'{}' already exists",
            path.display()
        )));
    }
    RunnerConfig::write_default_if_missing(path)?;
    println!("Wrote {}", path.display());
    Ok(0)
}
