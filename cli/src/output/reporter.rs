//! `TerminalNotifier`: Presentation-layer implementation of `Notifier`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::Notifier`
//! trait so application services can show notices without depending on any
//! presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::Notifier;
use crate::output::{OutputContext, progress};

/// Terminal notifier that wraps an `OutputContext`.
///
/// - `step()` shows a spinner on a TTY, else prints `"  → {message}"`
///   (suppressed when `ctx.quiet`)
/// - `success()` / `warn()` print through the context (suppressed when quiet)
/// - `error()` prints to stderr, never suppressed
///
/// Any running spinner is cleared before a notice is printed.
pub struct TerminalNotifier<'a> {
    ctx: &'a OutputContext,
    spinner: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalNotifier<'a> {
    /// Create a new `TerminalNotifier` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Notifier for TerminalNotifier<'_> {
    fn step(&self, message: &str) {
        self.clear_spinner();
        if self.ctx.show_progress() {
            *self.spinner.borrow_mut() = Some(progress::spinner(message));
        } else if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.info));
        }
    }

    fn success(&self, message: &str) {
        self.clear_spinner();
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.clear_spinner();
        self.ctx.warn(message);
    }

    fn error(&self, message: &str) {
        self.clear_spinner();
        self.ctx.error(message);
    }
}

impl Drop for TerminalNotifier<'_> {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}
