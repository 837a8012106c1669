//! Loading indicator shown while a remote call is in flight.
//!
//! The flag is raised by [`LoadingIndicator::begin`] and cleared when the
//! returned guard drops, so every exit path of an operation (success,
//! error, early return) settles it. When drawing is enabled a single
//! status line is printed to stderr and erased again on settle.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Coarse "loading" flag shared between the controller and its views.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    active: Arc<AtomicBool>,
    /// If false, nothing is drawn; the flag is still tracked.
    draw: bool,
}

impl LoadingIndicator {
    /// Create an indicator. `draw` controls terminal output.
    pub fn new(draw: bool) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            draw,
        }
    }

    /// Whether an operation is currently in flight.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Raise the indicator until the returned guard is dropped.
    #[must_use = "the indicator clears as soon as the guard is dropped"]
    pub fn begin(&self, label: &str) -> LoadingGuard {
        self.active.store(true, Ordering::SeqCst);
        if self.draw {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            let _ = writeln!(handle, "  {} {}", "◌".cyan().bold(), label.cyan());
            let _ = handle.flush();
        }
        LoadingGuard {
            active: Arc::clone(&self.active),
            draw: self.draw,
        }
    }
}

/// Clears the loading flag on drop.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicBool>,
    draw: bool,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if self.draw {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            // Move up one line and clear it
            let _ = write!(handle, "\x1b[1A\x1b[2K");
            let _ = handle.flush();
        }
    }
}
