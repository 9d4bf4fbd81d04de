//! # Output Configuration
//!
//! This module provides utilities for controlling CLI output appearance,
//! including color and symbol support based on terminal capabilities and
//! user preferences, plus the styled lines the sessions print.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables:
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use starter_cli::output::{self, OutputConfig};
//!
//! let config = OutputConfig::from_env();
//! config.apply();
//! println!("{}", output::intro("starter-cli"));
//! ```

use std::env;

use console::{style, StyledObject};

/// Output configuration for controlling colors and symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and fancy symbols should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment.
    ///
    /// Colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env() -> Self {
        Self {
            use_color: Self::detect_color_support(),
        }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Make the `console` styling used throughout the crate honor this
    /// configuration on both stdout and stderr.
    pub fn apply(&self) {
        console::set_colors_enabled(self.use_color);
        console::set_colors_enabled_stderr(self.use_color);
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Returns the appropriate string based on color configuration.
///
/// When colors are enabled, returns the fancy symbol. When disabled, returns
/// the plain text alternative.
pub fn symbol<'a>(config: &OutputConfig, fancy: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        fancy
    } else {
        plain
    }
}

/// Banner printed when the interactive session starts.
pub fn intro(name: &str) -> StyledObject<String> {
    style(format!(" {} ", name)).black().on_cyan()
}

/// First line of the default banner.
pub fn title(name: &str, version: &str) -> StyledObject<String> {
    style(format!("{} v{}", name, version)).cyan()
}

/// Secondary, de-emphasized text.
pub fn hint(text: &str) -> StyledObject<&str> {
    style(text).dim()
}

/// Closing line after the work step succeeded.
pub fn outro_success(text: &str) -> StyledObject<&str> {
    style(text).green()
}

/// Closing line after the user backed out of the prompt.
pub fn outro_cancelled(text: &str) -> StyledObject<&str> {
    style(text).yellow()
}

/// A single `Error: <message>` line, used both as the failed-session outro
/// and for errors caught by the binary.
pub fn error_line(message: impl std::fmt::Display) -> StyledObject<String> {
    style(format!("Error: {}", message)).red()
}
