//! Seams to the host application.
//!
//! The session never owns the model or the UI. It borrows a [`Document`] for
//! reads and scoped writes, asks a [`PickService`] for one element at a time,
//! and reports through a [`Notifier`] and a [`ViewRefresh`]. Each trait is
//! small so a test double is a few lines.

use crate::doc::{Element, ElementId};
use crate::error::MatchError;

/// Result of one pick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The operator picked an element the filter allowed.
    Picked(ElementId),
    /// The operator pressed Escape (or the UI otherwise aborted the pick).
    Cancelled,
}

/// Blocking single-element pick gesture.
pub trait PickService {
    /// Block until the operator picks an element for which `allows` returns
    /// true, or cancels. May be called any number of times in sequence.
    fn pick_one(&mut self, prompt: &str, allows: &dyn Fn(ElementId) -> bool) -> PickOutcome;
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A toast shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, title: title.into(), message: message.into() }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Fire-and-forget redraw of the active view.
pub trait ViewRefresh {
    fn refresh_view(&mut self);
}

/// Host model with an all-or-nothing transaction mechanism.
///
/// Implementations allow `element_mut` only while a transaction is open.
/// A failed `commit_transaction` must leave the model rolled back and the
/// transaction closed.
pub trait Document {
    /// Look up an element by id.
    fn element(&self, id: ElementId) -> Option<&Element>;

    /// Borrow an element for writing inside the open transaction.
    ///
    /// # Errors
    ///
    /// `NoActiveTransaction` outside a transaction, `ElementNotFound` for an
    /// unknown id.
    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, MatchError>;

    /// Open a transaction under `label`.
    ///
    /// # Errors
    ///
    /// `TransactionActive` if one is already open.
    fn begin_transaction(&mut self, label: &str) -> Result<(), MatchError>;

    /// Make every write since `begin_transaction` visible at once.
    ///
    /// # Errors
    ///
    /// `HostMutation` when the host refuses the change (already rolled back),
    /// `NoActiveTransaction` if nothing is open.
    fn commit_transaction(&mut self) -> Result<(), MatchError>;

    /// Discard every write since `begin_transaction`. No-op when nothing is open.
    fn rollback_transaction(&mut self);
}
