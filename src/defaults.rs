//! Default values for the starter-cli sessions.
//!
//! This module provides the fixed strings and timings used by the session
//! runner, so the binary, the library and the tests agree on them.

use std::time::Duration;

/// Name shown in the banners.
pub const CLI_NAME: &str = env!("CARGO_PKG_NAME");

/// Version shown in the default banner.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Second line of the default banner.
pub const INTERACTIVE_HINT: &str = "Run with --interactive for TUI mode";

/// Question asked by the interactive menu.
pub const PROMPT_MESSAGE: &str = "What would you like to do?";

/// Spinner message while the work step runs.
pub const WORKING_MESSAGE: &str = "Processing...";

/// Spinner label after the work step succeeds.
pub const DONE_LABEL: &str = "Done!";

/// Spinner label after the work step fails.
pub const FAILED_LABEL: &str = "Failed";

/// How long the placeholder work step sleeps.
pub const SIMULATED_WORK_DELAY: Duration = Duration::from_millis(1000);

/// Interval between spinner frames.
pub const SPINNER_TICK: Duration = Duration::from_millis(100);
