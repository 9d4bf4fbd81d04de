//! Busy indicator shown while the work step runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::defaults::SPINNER_TICK;
use crate::output::{self, OutputConfig};

/// A steady-ticking spinner with a message, drawn on stderr.
///
/// indicatif hides the spinner on its own when stderr is not a terminal, so
/// piped output only ever contains the final label.
pub struct Spinner {
    bar: ProgressBar,
    output: OutputConfig,
}

impl Spinner {
    /// Start spinning with `message` next to the animation.
    pub fn start(message: &str, output: &OutputConfig) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), message, output)
    }

    /// A spinner that never draws, for callers that must stay silent.
    pub fn hidden(message: &str, output: &OutputConfig) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Self::with_bar(bar, message, output)
    }

    fn with_bar(bar: ProgressBar, message: &str, output: &OutputConfig) -> Self {
        // The template is a constant, so a parse failure only loses styling.
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(SPINNER_TICK);
        Self {
            bar,
            output: output.clone(),
        }
    }

    /// Stop the animation and leave a success `label` in its place.
    pub fn stop(self, label: &str) {
        let mark = output::symbol(&self.output, "✔", "[ok]");
        self.plain();
        self.bar
            .finish_with_message(format!("{} {}", console::style(mark).green(), label));
    }

    /// Stop the animation and leave a failure `label` in its place.
    pub fn fail(self, label: &str) {
        let mark = output::symbol(&self.output, "✖", "[x]");
        self.plain();
        self.bar
            .abandon_with_message(format!("{} {}", console::style(mark).red(), label));
    }

    /// Drop the spinner frame so the final line is just the message.
    fn plain(&self) {
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            self.bar.set_style(style);
        }
    }

    /// The message currently shown next to the spinner.
    #[cfg(test)]
    pub(crate) fn message(&self) -> String {
        self.bar.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_keeps_message() {
        let spinner = Spinner::hidden("Processing...", &OutputConfig::without_color());
        assert_eq!(spinner.message(), "Processing...");
        spinner.stop("Done!");
    }

    #[test]
    fn test_hidden_spinner_can_fail() {
        let spinner = Spinner::hidden("Processing...", &OutputConfig::without_color());
        spinner.fail("Failed");
    }
}
