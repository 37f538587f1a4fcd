//! Per-kind capture and apply.
//!
//! DESIGN
//! ======
//! A [`MatchKind`] is chosen once when a session is built and decides the
//! filter, prompts, transaction label, and how the source is captured. The
//! captured tuple is a [`Captured`] variant that knows how to paste itself onto
//! a target, so apply dispatches on what was captured and cannot be paired
//! with the wrong kind.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use crate::consts::{TXN_MATCH_ELEVATION, TXN_PASTE_DIMENSION_TEXT};
use crate::doc::{DimensionText, Element, Location};
use crate::error::MatchError;
use crate::filter::SelectionFilter;
use crate::geom::{midpoint_elevation, shift_to_midpoint};
use crate::units::DisplayUnit;

/// Which attribute set a session copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Above/below/prefix/suffix text between dimensions.
    DimensionText,
    /// Centerline midpoint elevation between linear MEP elements.
    Elevation,
}

/// Attribute tuple captured from the source, held for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub enum Captured {
    Text(DimensionText),
    /// Midpoint elevation in internal feet.
    Elevation(f64),
}

impl MatchKind {
    #[must_use]
    pub fn filter(self) -> SelectionFilter {
        match self {
            Self::DimensionText => SelectionFilter::dimensions(),
            Self::Elevation => SelectionFilter::mep_curves(),
        }
    }

    #[must_use]
    pub fn transaction_label(self) -> &'static str {
        match self {
            Self::DimensionText => TXN_PASTE_DIMENSION_TEXT,
            Self::Elevation => TXN_MATCH_ELEVATION,
        }
    }

    #[must_use]
    pub fn source_prompt(self) -> &'static str {
        match self {
            Self::DimensionText => "Select SOURCE dimension to copy text from",
            Self::Elevation => "Select SOURCE element to copy elevation from",
        }
    }

    /// Prompt for each target pick. The elevation prompt shows the captured
    /// value so the operator can confirm what is being pasted.
    #[must_use]
    pub fn target_prompt(self, captured: &Captured, unit: DisplayUnit, decimals: usize) -> String {
        match (self, captured) {
            (Self::Elevation, Captured::Elevation(feet)) => format!(
                "Click elements to match elevation (Press ESC to finish) - Elevation: {}",
                unit.format(*feet, decimals)
            ),
            _ => "Select a TARGET dimension to paste to (Press ESC to finish)".to_string(),
        }
    }

    /// Singular noun for summary messages.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::DimensionText => "dimension",
            Self::Elevation => "element",
        }
    }

    /// Past-tense phrase for summary messages, followed by the count.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::DimensionText => "copied text to",
            Self::Elevation => "matched elevation on",
        }
    }

    /// Capture the attribute tuple from `source`.
    ///
    /// # Errors
    ///
    /// `NoCapturableData` for a dimension whose four fields are all blank;
    /// `UnsupportedGeometry` for an elevation source that is not a bounded line.
    pub fn capture(self, source: &Element) -> Result<Captured, MatchError> {
        match self {
            Self::DimensionText => {
                if source.text.is_blank() {
                    return Err(MatchError::NoCapturableData(source.id));
                }
                Ok(Captured::Text(source.text.clone()))
            }
            Self::Elevation => {
                let segment = source.location.as_line()?;
                Ok(Captured::Elevation(midpoint_elevation(segment)))
            }
        }
    }
}

impl Captured {
    /// Paste this tuple onto `target`.
    ///
    /// Text overwrites all four fields, blank values included. Elevation
    /// shifts the target's own segment so its midpoint lands on the captured
    /// value, keeping x/y and slope.
    ///
    /// # Errors
    ///
    /// `UnsupportedGeometry` when an elevation target is not a bounded line;
    /// the target is not written.
    pub fn apply(&self, target: &mut Element) -> Result<(), MatchError> {
        match self {
            Self::Text(text) => {
                target.text.clone_from(text);
                Ok(())
            }
            Self::Elevation(elevation) => {
                let shifted = shift_to_midpoint(target.location.as_line()?, *elevation);
                target.location = Location::Line { segment: shifted };
                Ok(())
            }
        }
    }
}
