//! Terminal host: picks come from input lines, notices go to the output.
//!
//! A pick line is an element mark or UUID. An empty line, `esc`, `q`, or end
//! of input cancels, which is how the operator ends a session. Lines that
//! name an unknown element or one the session's filter rejects are refused
//! and the prompt repeats, the way a CAD pick gesture ignores clicks on the
//! wrong category.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::collections::HashMap;
use std::io::{BufRead, Write};

use matcher::{DocStore, ElementId, Notice, NoticeKind, Notifier, PickOutcome, PickService, ViewRefresh};
use uuid::Uuid;

const CANCEL_WORDS: [&str; 4] = ["esc", "escape", "q", "quit"];

// =============================================================================
// PICKER
// =============================================================================

pub struct ConsolePicker<R, W> {
    input: R,
    output: W,
    names: HashMap<String, ElementId>,
}

impl<R: BufRead, W: Write> ConsolePicker<R, W> {
    /// Build a picker that resolves marks against the elements in `doc`.
    pub fn new(input: R, output: W, doc: &DocStore) -> Self {
        let names = doc
            .snapshot()
            .into_iter()
            .filter(|e| !e.name.is_empty())
            .map(|e| (e.name.clone(), e.id))
            .collect();
        Self { input, output, names }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn resolve(&self, token: &str) -> Option<ElementId> {
        Uuid::parse_str(token).ok().or_else(|| self.names.get(token).copied())
    }

    fn read_token(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "pick input unreadable; treating as cancel");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> PickService for ConsolePicker<R, W> {
    fn pick_one(&mut self, prompt: &str, allows: &dyn Fn(ElementId) -> bool) -> PickOutcome {
        loop {
            let _ = write!(self.output, "{prompt}\n> ");
            let _ = self.output.flush();

            let Some(token) = self.read_token() else {
                return PickOutcome::Cancelled;
            };
            if token.is_empty() || CANCEL_WORDS.contains(&token.to_ascii_lowercase().as_str()) {
                return PickOutcome::Cancelled;
            }

            match self.resolve(&token) {
                Some(id) if allows(id) => return PickOutcome::Picked(id),
                Some(_) => {
                    let _ = writeln!(self.output, "'{token}' cannot be picked here.");
                }
                None => {
                    let _ = writeln!(self.output, "No element named '{token}'.");
                }
            }
        }
    }
}

// =============================================================================
// NOTICES + VIEW
// =============================================================================

pub struct ConsoleUi<W> {
    output: W,
    refreshes: usize,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(output: W) -> Self {
        Self { output, refreshes: 0 }
    }

    /// Number of view refreshes requested so far.
    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Notifier for ConsoleUi<W> {
    fn notify(&mut self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        };
        let _ = writeln!(self.output, "[{tag}] {}: {}", notice.title, notice.message);
    }
}

impl<W> ViewRefresh for ConsoleUi<W> {
    fn refresh_view(&mut self) {
        self.refreshes += 1;
        tracing::debug!(refreshes = self.refreshes, "view refreshed");
    }
}
