//! Snapshot tests for CLI output using insta.
//!
//! These tests capture CLI help text and the default banner as snapshots,
//! making it easy to review changes to user-facing output.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

mod common;
use common::prelude::*;

/// Normalize version-dependent parts of CLI output for stable snapshots
fn normalize_output(output: &str) -> String {
    let re = regex::Regex::new(r"starter-cli v?\d+\.\d+\.\d+").unwrap();
    let versioned = re.replace_all(output, "starter-cli [VERSION]");
    // Strip trailing whitespace from each line to match pre-commit formatting
    versioned
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_main_help_snapshot() {
    let output = starter_cli()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let normalized = normalize_output(&stdout);

    insta::assert_snapshot!("main_help", normalized);
}

#[test]
fn test_default_banner_snapshot() {
    let output = starter_cli().output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let normalized = normalize_output(&stdout);

    insta::assert_snapshot!("default_banner", normalized);
}
