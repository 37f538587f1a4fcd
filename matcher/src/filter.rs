//! Pick filters by element kind.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::doc::{Element, ElementKind, MEP_CURVE_KINDS};

/// Pure predicate restricting which elements may be picked.
///
/// The same filter gates the source pick and every target pick of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFilter {
    allowed: Vec<ElementKind>,
}

impl SelectionFilter {
    /// Allow exactly the given kinds.
    #[must_use]
    pub fn kinds(allowed: impl IntoIterator<Item = ElementKind>) -> Self {
        Self { allowed: allowed.into_iter().collect() }
    }

    /// Dimensions only.
    #[must_use]
    pub fn dimensions() -> Self {
        Self::kinds([ElementKind::Dimension])
    }

    /// Pipes, ducts, cable trays, conduits, flex ducts, and flex pipes.
    #[must_use]
    pub fn mep_curves() -> Self {
        Self::kinds(MEP_CURVE_KINDS)
    }

    #[must_use]
    pub fn allows(&self, element: &Element) -> bool {
        self.allowed.contains(&element.kind)
    }

    #[must_use]
    pub fn allowed_kinds(&self) -> &[ElementKind] {
        &self.allowed
    }
}
