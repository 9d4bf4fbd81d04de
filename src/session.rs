//! # Session Runner
//!
//! A session is one run of either flow, from process start to exit:
//!
//! - **Default**: print the two-line version banner. Always succeeds.
//! - **Interactive**: print the intro banner, ask the user to pick a menu
//!   entry, then run the work step behind a spinner and report how it went.
//!
//! Nothing here exits the process. Every path ends in an [`Outcome`] or an
//! [`Error`](crate::error::Error) that the binary turns into an exit status.

use std::io::{self, Write};

use log::debug;

use crate::config::{Config, Mode};
use crate::defaults::{
    CLI_NAME, CLI_VERSION, DONE_LABEL, FAILED_LABEL, INTERACTIVE_HINT, PROMPT_MESSAGE,
    WORKING_MESSAGE,
};
use crate::error::Result;
use crate::output::{self, OutputConfig};
use crate::prompt::{Prompter, Selection, TerminalPrompter, MENU_OPTIONS};
use crate::spinner::Spinner;
use crate::work::{SimulatedWork, Work};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The flow ran to the end.
    Completed,
    /// The user backed out of the prompt. Not an error.
    Cancelled,
    /// The work step failed. The failure has already been reported.
    Failed,
}

impl Outcome {
    /// Whether the process should exit with status 0.
    pub fn is_success(self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}

/// Run the flow selected by `config` against the real terminal.
pub fn run(config: &Config, output: &OutputConfig) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    debug!("running session in {:?} mode", config.mode());
    match config.mode() {
        Mode::Default => {
            run_default(&mut out)?;
            Ok(Outcome::Completed)
        }
        Mode::Interactive => {
            InteractiveSession::new(TerminalPrompter::new(), SimulatedWork::default(), output)
                .run(&mut out)
        }
    }
}

/// Print the version banner and a hint about interactive mode.
pub fn run_default<O: Write>(out: &mut O) -> Result<()> {
    writeln!(out, "{}", output::title(CLI_NAME, CLI_VERSION))?;
    writeln!(out, "{}", output::hint(INTERACTIVE_HINT))?;
    Ok(())
}

/// The interactive flow: intro, prompt, then either cancel or work.
pub struct InteractiveSession<P, W> {
    prompter: P,
    work: W,
    output: OutputConfig,
    draw_spinner: bool,
}

impl<P: Prompter, W: Work> InteractiveSession<P, W> {
    pub fn new(prompter: P, work: W, output: &OutputConfig) -> Self {
        Self {
            prompter,
            work,
            output: output.clone(),
            draw_spinner: true,
        }
    }

    /// Keep the spinner off the terminal while still driving it.
    #[cfg(test)]
    pub(crate) fn hide_spinner(mut self) -> Self {
        self.draw_spinner = false;
        self
    }

    /// Walk the session to one of its terminal states.
    pub fn run<O: Write>(mut self, out: &mut O) -> Result<Outcome> {
        writeln!(out, "{}", output::intro(CLI_NAME))?;
        out.flush()?;

        let option = match self.prompter.select(PROMPT_MESSAGE, &MENU_OPTIONS)? {
            Selection::Chosen(option) => option,
            Selection::Cancelled => {
                debug!("prompt cancelled");
                writeln!(out, "{}", output::outro_cancelled("Cancelled"))?;
                return Ok(Outcome::Cancelled);
            }
        };
        debug!("selected {}", option.value);

        let spinner = if self.draw_spinner {
            Spinner::start(WORKING_MESSAGE, &self.output)
        } else {
            Spinner::hidden(WORKING_MESSAGE, &self.output)
        };

        match self.work.run() {
            Ok(()) => {
                spinner.stop(DONE_LABEL);
                writeln!(out, "{}", output::outro_success("Completed successfully"))?;
                Ok(Outcome::Completed)
            }
            Err(e) => {
                debug!("work step failed: {:#}", e);
                spinner.fail(FAILED_LABEL);
                writeln!(out, "{}", output::error_line(format!("{:#}", e)))?;
                Ok(Outcome::Failed)
            }
        }
    }
}
