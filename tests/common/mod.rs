//! Shared test utilities for the E2E tests.
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     starter_cli().assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use predicates::prelude::*;

    pub use super::starter_cli;
}

/// A `starter-cli` command with colors pinned off and default logging, so
/// assertions see plain text regardless of the environment running tests.
pub fn starter_cli() -> Command {
    let mut cmd = cargo_bin_cmd!("starter-cli");
    cmd.env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}
