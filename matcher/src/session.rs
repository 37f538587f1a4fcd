//! Mutation session: capture once, then paste onto each picked target.
//!
//! DESIGN
//! ======
//! The session is a plain state machine driven by blocking pick requests:
//!
//! ```text
//! AwaitingSource -> Ready -> AwaitingTarget <-> Applying
//!        |                        |
//!        +------> Finished <------+
//! ```
//!
//! Cancellation is an ordinary `PickOutcome`, honored only while waiting for
//! a pick. Each target is applied inside its own scoped transaction, so a
//! failing target is rolled back and recorded while the loop keeps running.
//! Every error ends up in the returned [`SessionReport`]; nothing propagates
//! to the caller. One summary notice is sent when the session finishes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write;

use tracing::{debug, info, warn};

use crate::adapter::{Captured, MatchKind};
use crate::doc::{Element, ElementId};
use crate::error::MatchError;
use crate::filter::SelectionFilter;
use crate::host::{Document, Notice, NoticeKind, Notifier, PickOutcome, PickService, ViewRefresh};
use crate::txn::Transaction;
use crate::units::DisplayUnit;

// =============================================================================
// TYPES
// =============================================================================

/// Presentation options for prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub display_unit: DisplayUnit,
    /// Fraction digits when showing a captured elevation.
    pub elevation_decimals: usize,
}

/// Why the session stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// The operator cancelled the source pick.
    CancelledBeforeCapture,
    /// The source had nothing worth copying; no target was requested.
    NothingToCopy,
    /// The source could not be captured for another reason.
    CaptureFailed(MatchError),
    /// The operator cancelled a target pick (the normal exit).
    Completed,
}

/// A target that could not be updated, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFailure {
    pub target: ElementId,
    pub reason: MatchError,
}

/// Outcome of one session, reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub kind: MatchKind,
    /// The tuple captured from the source, if capture succeeded.
    pub captured: Option<Captured>,
    pub success_count: usize,
    /// Failures in pick order.
    pub failures: Vec<TargetFailure>,
    pub termination: Termination,
}

enum State {
    AwaitingSource,
    Ready(Captured),
    AwaitingTarget(Captured),
    Applying(Captured, ElementId),
    Finished(Termination),
}

/// One interactive capture-and-paste run.
///
/// Borrows the host document, pick service, and UI for its lifetime; holds no
/// other state between runs.
pub struct MutationSession<'a, D, P, U> {
    doc: &'a mut D,
    picker: &'a mut P,
    ui: &'a mut U,
    kind: MatchKind,
    filter: SelectionFilter,
    options: SessionOptions,
}

// =============================================================================
// SESSION
// =============================================================================

impl<'a, D, P, U> MutationSession<'a, D, P, U>
where
    D: Document,
    P: PickService,
    U: Notifier + ViewRefresh,
{
    #[must_use]
    pub fn new(doc: &'a mut D, picker: &'a mut P, ui: &'a mut U, kind: MatchKind) -> Self {
        Self { doc, picker, ui, kind, filter: kind.filter(), options: SessionOptions::default() }
    }

    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Run to completion and return the report. Sends exactly one summary
    /// notice before returning.
    pub fn run(mut self) -> SessionReport {
        info!(kind = ?self.kind, allowed = ?self.filter.allowed_kinds(), "match session started");
        let mut report = SessionReport {
            kind: self.kind,
            captured: None,
            success_count: 0,
            failures: Vec::new(),
            termination: Termination::Completed,
        };

        let mut state = State::AwaitingSource;
        loop {
            state = match state {
                State::AwaitingSource => self.await_source(),
                State::Ready(captured) => {
                    debug!(?captured, "source captured");
                    report.captured = Some(captured.clone());
                    State::AwaitingTarget(captured)
                }
                State::AwaitingTarget(captured) => {
                    let prompt = self.kind.target_prompt(
                        &captured,
                        self.options.display_unit,
                        self.options.elevation_decimals,
                    );
                    match self.pick(&prompt) {
                        PickOutcome::Picked(target) => State::Applying(captured, target),
                        PickOutcome::Cancelled => State::Finished(Termination::Completed),
                    }
                }
                State::Applying(captured, target) => {
                    match self.apply_target(target, &captured) {
                        Ok(()) => {
                            report.success_count += 1;
                            self.ui.refresh_view();
                            info!(%target, "target updated");
                        }
                        Err(e) => {
                            warn!(%target, error = %e, code = e.code(), "target update failed; rolled back");
                            report.failures.push(TargetFailure { target, reason: e });
                        }
                    }
                    State::AwaitingTarget(captured)
                }
                State::Finished(termination) => {
                    report.termination = termination;
                    break;
                }
            };
        }

        info!(
            success_count = report.success_count,
            failure_count = report.failures.len(),
            termination = ?report.termination,
            "match session finished"
        );
        self.ui.notify(&report.summary());
        report
    }

    fn pick(&mut self, prompt: &str) -> PickOutcome {
        let doc = &*self.doc;
        let filter = &self.filter;
        let allows = |id: ElementId| doc.element(id).is_some_and(|e| filter.allows(e));
        self.picker.pick_one(prompt, &allows)
    }

    fn await_source(&mut self) -> State {
        let source = match self.pick(self.kind.source_prompt()) {
            PickOutcome::Picked(id) => id,
            PickOutcome::Cancelled => {
                debug!("source pick cancelled");
                return State::Finished(Termination::CancelledBeforeCapture);
            }
        };

        let element = match self.admit(source) {
            Ok(element) => element,
            Err(e) => {
                warn!(%source, error = %e, code = e.code(), "source rejected");
                return State::Finished(Termination::CaptureFailed(e));
            }
        };

        match self.kind.capture(element) {
            Ok(captured) => State::Ready(captured),
            Err(MatchError::NoCapturableData(_)) => {
                info!(%source, "source has nothing to copy");
                State::Finished(Termination::NothingToCopy)
            }
            Err(e) => {
                warn!(%source, error = %e, "source capture failed");
                State::Finished(Termination::CaptureFailed(e))
            }
        }
    }

    /// Resolve a picked id and hold it to the session filter. The pick
    /// service is only asked to honor the filter, so it is checked again here.
    fn admit(&self, id: ElementId) -> Result<&Element, MatchError> {
        let element = self.doc.element(id).ok_or(MatchError::ElementNotFound(id))?;
        if !self.filter.allows(element) {
            return Err(MatchError::KindNotSelectable { id, kind: element.kind });
        }
        Ok(element)
    }

    fn apply_target(&mut self, target: ElementId, captured: &Captured) -> Result<(), MatchError> {
        self.admit(target)?;
        let mut txn = Transaction::start(&mut *self.doc, self.kind.transaction_label())?;
        match txn.element_mut(target).and_then(|element| captured.apply(element)) {
            Ok(()) => txn.commit(),
            Err(e) => {
                debug!(label = txn.label(), %target, "apply failed; discarding writes");
                txn.rollback();
                Err(e)
            }
        }
    }
}

// =============================================================================
// REPORT
// =============================================================================

impl SessionReport {
    /// The single end-of-session notice.
    #[must_use]
    pub fn summary(&self) -> Notice {
        let noun = self.kind.noun();
        match &self.termination {
            Termination::CancelledBeforeCapture => {
                Notice::new(NoticeKind::Info, "Cancelled", "Operation cancelled by user.")
            }
            // Only blank dimension text is reported this way.
            Termination::NothingToCopy => Notice::new(
                NoticeKind::Warning,
                "No Text Found",
                "The selected source dimension has no text in the 'Above', 'Below', 'Prefix', or 'Suffix' fields to copy.",
            ),
            Termination::CaptureFailed(reason) => Notice::new(
                NoticeKind::Error,
                "Error",
                format!("Could not capture from source element: {reason}"),
            ),
            Termination::Completed => {
                let mut message = if self.success_count > 0 {
                    format!("Finished. Successfully {} {} {noun}(s).", self.kind.verb(), self.success_count)
                } else {
                    format!("Operation finished. No {noun}s were updated.")
                };

                if self.failures.is_empty() {
                    let title = if self.success_count > 0 { "Success" } else { "Finished" };
                    return Notice::new(NoticeKind::Info, title, message);
                }

                let _ = write!(message, "\n{} target(s) failed:", self.failures.len());
                for failure in &self.failures {
                    let _ = write!(message, "\n- {}: {}", failure.target, failure.reason);
                }
                Notice::new(NoticeKind::Warning, "Finished with errors", message)
            }
        }
    }
}
