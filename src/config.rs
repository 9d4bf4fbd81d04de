//! Per-invocation configuration.
//!
//! A [`Config`] is built once from the command line by the binary and handed
//! to [`session::run`](crate::session::run). Nothing here is persisted.

/// The recognized options of one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Run the interactive menu instead of printing the banner.
    pub interactive: bool,
}

/// Which of the two session flows a [`Config`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the version banner and exit.
    Default,
    /// Prompt for an action, then run the work step behind a spinner.
    Interactive,
}

impl Config {
    /// The flow this configuration selects.
    pub fn mode(&self) -> Mode {
        if self.interactive {
            Mode::Interactive
        } else {
            Mode::Default
        }
    }
}
