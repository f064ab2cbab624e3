mod demo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};
use console_tree::{ConsoleOutput, SettingsFile};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use demo::Scenario;

const PROGRAM: &str = env!("CARGO_BIN_NAME");

fn command() -> Command {
    Command::new(PROGRAM)
        .about("Write sample trees to the console")
        .arg(
            Arg::new("scenario")
                .help("Scenario to display (basics, levels, indent, double, colors, custom, fluent)")
                .index(1),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .value_name("FILE")
                .help("JSON file overriding the scenario's display settings")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the tree
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let overrides = matches
        .get_one::<PathBuf>("settings")
        .map(SettingsFile::load)
        .transpose()?;

    let scenario = match matches.get_one::<String>("scenario") {
        Some(name) => match name.parse::<Scenario>() {
            Ok(scenario) => Some(scenario),
            Err(err) => {
                warn!("{}", err);
                None
            }
        },
        None => None,
    };

    let Some(scenario) = scenario else {
        print!("{}", demo::usage(PROGRAM));
        return Ok(());
    };

    let mut out = ConsoleOutput::stdout();
    scenario.run(&mut out, overrides.as_ref())?;
    out.flush()?;

    Ok(())
}
