//! Scoped transaction guard.
//!
//! `Transaction` opens a host transaction on construction and closes it on
//! every exit path: `commit` consumes the guard, and dropping an unfinished
//! guard rolls back. An early `?` return from an apply step therefore never
//! leaves a transaction open across the next pick.

#[cfg(test)]
#[path = "txn_test.rs"]
mod txn_test;

use crate::doc::{Element, ElementId};
use crate::error::MatchError;
use crate::host::Document;

pub struct Transaction<'d, D: Document> {
    doc: &'d mut D,
    label: String,
    finished: bool,
}

impl<'d, D: Document> Transaction<'d, D> {
    /// Open a transaction on `doc` under `label`.
    ///
    /// # Errors
    ///
    /// Propagates the host's refusal to open (typically `TransactionActive`).
    pub fn start(doc: &'d mut D, label: &str) -> Result<Self, MatchError> {
        doc.begin_transaction(label)?;
        tracing::trace!(label, "transaction started");
        Ok(Self { doc, label: label.to_string(), finished: false })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow an element for writing.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the id is not in the document.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, MatchError> {
        self.doc.element_mut(id)
    }

    /// Commit and close.
    ///
    /// # Errors
    ///
    /// `HostMutation` when the host rejects the change; the host has already
    /// rolled back.
    pub fn commit(mut self) -> Result<(), MatchError> {
        self.finished = true;
        self.doc.commit_transaction()?;
        tracing::trace!(label = %self.label, "transaction committed");
        Ok(())
    }

    /// Discard every write and close.
    pub fn rollback(mut self) {
        self.finished = true;
        self.doc.rollback_transaction();
        tracing::trace!(label = %self.label, "transaction rolled back");
    }
}

impl<D: Document> Drop for Transaction<'_, D> {
    fn drop(&mut self) {
        if !self.finished {
            self.doc.rollback_transaction();
            tracing::debug!(label = %self.label, "transaction dropped without commit; rolled back");
        }
    }
}
