//! # Starter CLI Library
//!
//! This library holds everything the `starter-cli` binary does beyond
//! argument parsing: the two session flows and the small seams around the
//! terminal they talk to. The binary is a thin wrapper that builds a
//! [`config::Config`], calls [`session::run`], and maps the result to an exit
//! status.
//!
//! ## Quick Example
//!
//! ```
//! use starter_cli::session;
//!
//! let mut out = Vec::new();
//! session::run_default(&mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("v0.1.0"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the options of one invocation and the
//!   flow they select.
//! - **Sessions (`session`)**: the default banner and the interactive flow,
//!   which ends as completed, cancelled, or failed.
//! - **Prompting (`prompt`)**, **spinner (`spinner`)** and **work (`work`)**:
//!   the collaborators of the interactive flow, each behind a small type so
//!   tests can replace them.
//! - **Output (`output`)**: color detection and the styled lines printed by
//!   the sessions.

pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod prompt;
pub mod session;
pub mod spinner;
pub mod work;
