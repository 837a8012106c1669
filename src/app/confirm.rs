//! Interactive confirmation before destructive actions.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Asks the user to approve an action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approves everything (`--yes`, or confirmation disabled in config).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Prompts on stderr and reads a `y`/`yes` answer from stdin.
///
/// Anything else, including EOF or a read error, declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            let _ = write!(handle, "  {} {} [y/N] ", "?".yellow().bold(), prompt);
            let _ = handle.flush();
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
