//! # Starter CLI
//!
//! This is the binary entry point for the `starter-cli` command-line tool.
//!
//! Its primary responsibilities are:
//! - Setting up logging and color output.
//! - Parsing command-line arguments using `clap`.
//! - Running the selected session and translating its result into an exit
//!   status.
//!
//! The session logic lives in the `lib.rs` library crate, so the binary stays
//! a thin wrapper around it.

mod cli;

use std::process::ExitCode;

use starter_cli::output::OutputConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // With a handler installed, Ctrl-C at the menu comes back as an
    // interrupted read and cancels the prompt instead of killing the process.
    // The handler itself does nothing; the prompt is the only place that
    // reacts to Ctrl-C.
    if let Err(e) = ctrlc::set_handler(|| {}) {
        log::warn!("could not install Ctrl-C handler: {}", e);
    }

    let output = OutputConfig::from_env();
    output.apply();

    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        // Usage errors, --help and --version keep clap's own output and status.
        Err(e) => e.exit(),
    };

    cli::execute(config, &output)
}
