//! Single-choice menu prompting.
//!
//! The interactive session talks to the user through the [`Prompter`] trait
//! so it can be driven by a scripted prompter in tests. The terminal
//! implementation is a thin wrapper over `dialoguer::Select`.

use std::io;

use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::error::Result;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    /// Stable identifier, suitable for logs.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// The entries offered by the interactive session. Both are placeholders
/// and lead to the same work step.
pub const MENU_OPTIONS: [MenuOption; 2] = [
    MenuOption {
        value: "option1",
        label: "Option 1",
    },
    MenuOption {
        value: "option2",
        label: "Option 2",
    },
];

/// What the user did at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user picked an entry.
    Chosen(MenuOption),
    /// The user backed out (Esc, `q` or Ctrl-C).
    Cancelled,
}

/// Something that can ask the user to pick one of several options.
pub trait Prompter {
    /// Ask `message` and wait for the user to choose one of `options`.
    fn select(&mut self, message: &str, options: &[MenuOption]) -> Result<Selection>;
}

impl<T: Prompter + ?Sized> Prompter for &mut T {
    fn select(&mut self, message: &str, options: &[MenuOption]) -> Result<Selection> {
        (**self).select(message, options)
    }
}

/// Prompts on the controlling terminal using dialoguer's colorful theme.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, options: &[MenuOption]) -> Result<Selection> {
        let labels: Vec<&str> = options.iter().map(|o| o.label).collect();

        let picked = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt();

        let selection = interpret(picked, options)?;
        if selection == Selection::Cancelled {
            // dialoguer leaves the cursor hidden when the read is interrupted
            let _ = Term::stderr().show_cursor();
        }
        Ok(selection)
    }
}

/// Map dialoguer's answer onto a [`Selection`].
///
/// Ctrl-C arrives as an interrupted read once the binary has a SIGINT
/// handler installed, and counts as cancelling, like Esc or `q`.
fn interpret(
    picked: std::result::Result<Option<usize>, dialoguer::Error>,
    options: &[MenuOption],
) -> Result<Selection> {
    match picked {
        Ok(Some(index)) => Ok(options
            .get(index)
            .copied()
            .map_or(Selection::Cancelled, Selection::Chosen)),
        Ok(None) => Ok(Selection::Cancelled),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            Ok(Selection::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}
