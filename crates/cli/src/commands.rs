//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("fixtura")
        .about("Run fixture suites with ordered setup hooks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log runner activity to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("run")
                .about("Run one fixture, or all of them")
                .arg(Arg::new("fixture").help("Fixture name (default: all fixtures)"))
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .help("Only run tests whose name contains this substring"),
                )
                .arg(
                    Arg::new("fail-fast")
                        .long("fail-fast")
                        .help("Stop after the first test that does not pass")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Runner config file (default: ./fixtura.toml if present)"),
                ),
        )
        .subcommand(Command::new("list").about("List fixtures and their tests"))
        .subcommand(Command::new("streams").about("Print the iterator demonstrations"))
        .subcommand(
            Command::new("init").about("Write a default fixtura.toml in the current directory"),
        )
}
