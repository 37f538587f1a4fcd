//! Shared constants for the matcher crate.

// ── Units ───────────────────────────────────────────────────────

/// Millimeters per internal length unit (the host stores decimal feet).
pub const MM_PER_FOOT: f64 = 304.8;

// ── Geometry ────────────────────────────────────────────────────

/// Endpoints closer than this (in feet) are treated as the same point.
///
/// Matches the short-curve tolerance hosts apply when building a bounded line.
pub const SHORT_CURVE_TOLERANCE: f64 = 1e-9;

// ── Transactions ────────────────────────────────────────────────

/// Undo-stack label for pasting dimension text onto one target.
pub const TXN_PASTE_DIMENSION_TEXT: &str = "Paste Dimension Text";

/// Undo-stack label for matching one target's elevation.
pub const TXN_MATCH_ELEVATION: &str = "Match Elevation";
