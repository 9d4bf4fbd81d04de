//! CLI argument parsing and session dispatch

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use starter_cli::config::Config;
use starter_cli::error;
use starter_cli::output::{self, OutputConfig};
use starter_cli::session::{self, Outcome};

/// A starter command-line tool with an interactive prompt mode
#[derive(Parser, Debug)]
#[command(name = "starter-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            interactive: cli.interactive,
        }
    }
}

/// Parse an argument list (including the program name) into a [`Config`].
pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Config::from)
}

/// Run the session `config` selects and decide the exit status.
pub fn execute(config: Config, output: &OutputConfig) -> ExitCode {
    debug!("parsed {:?}", config);

    let result = session::run(&config, output);
    ExitCode::from(report(result, &mut io::stderr()))
}

/// Turn a session result into an exit status.
///
/// This is the only place a result becomes a process exit status: errors are
/// printed once to `err` as `Error: <message>` and give 1, a failed work step
/// (already reported by the session) gives 1, everything else gives 0.
fn report<E: Write>(result: error::Result<Outcome>, err: &mut E) -> u8 {
    match result {
        Ok(outcome) => {
            debug!("session ended: {:?}", outcome);
            if outcome.is_success() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            let _ = writeln!(err, "{}", output::error_line(e).for_stderr());
            1
        }
    }
}
