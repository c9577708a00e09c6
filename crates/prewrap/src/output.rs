//! Status lines on stderr.
//!
//! Documents and listings go to stdout; everything meant for the user goes here.

use std::fmt::Display;

use console::{Style, Term};

/// Status reporter for the CLI commands.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Report how many blocks a wrap run rewrote (green when any).
    pub(crate) fn wrapped(&self, count: usize, language_class: &str) {
        let style = if count == 0 {
            Style::new()
        } else {
            Style::new().green()
        };
        self.line(&style, &wrapped_message(count, language_class));
    }

    /// Warn that a scan found no blocks to list (yellow).
    pub(crate) fn nothing_found(&self, language_class: &str) {
        self.line(
            &Style::new().yellow(),
            &format!("No {language_class} code blocks found"),
        );
    }

    /// Report a failed command (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&Style::new().red(), &format!("Error: {err}"));
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn wrapped_message(count: usize, language_class: &str) -> String {
    match count {
        0 => format!("No {language_class} code blocks found"),
        1 => format!("Wrapped 1 {language_class} code block"),
        n => format!("Wrapped {n} {language_class} code blocks"),
    }
}
