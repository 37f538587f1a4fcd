//! Pick-and-paste attribute matching for CAD elements.
//!
//! An operator picks one source element, the engine captures a fixed attribute
//! tuple from it, and every following pick pastes that tuple onto the picked
//! target inside its own scoped transaction until the operator cancels. The
//! host application supplies the document, the pick gesture, and the toast
//! notifications through the traits in [`host`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | The [`session::MutationSession`] state machine and its report |
//! | [`adapter`] | Per-kind capture and apply ([`adapter::MatchKind`], [`adapter::Captured`]) |
//! | [`filter`] | Pick filters by element kind |
//! | [`geom`] | 3-D points, line segments, and the midpoint elevation shift |
//! | [`doc`] | Element model and the in-memory [`doc::DocStore`] |
//! | [`txn`] | Scoped transaction guard over any [`host::Document`] |
//! | [`host`] | Seams to the host document, pick UI, notifications, and view |
//! | [`units`] | Display unit conversion for prompts |
//! | [`error`] | [`error::MatchError`] |
//! | [`consts`] | Shared constants (unit factors, tolerances, transaction labels) |

pub mod adapter;
pub mod consts;
pub mod doc;
pub mod error;
pub mod filter;
pub mod geom;
pub mod host;
pub mod session;
pub mod txn;
pub mod units;

pub use adapter::{Captured, MatchKind};
pub use doc::{DimensionText, DocStore, Element, ElementId, ElementKind, Location};
pub use error::MatchError;
pub use filter::SelectionFilter;
pub use geom::{Point3, Segment, midpoint_elevation, shift_to_midpoint};
pub use host::{Document, Notice, NoticeKind, Notifier, PickOutcome, PickService, ViewRefresh};
pub use session::{MutationSession, SessionOptions, SessionReport, TargetFailure, Termination};
pub use txn::Transaction;
pub use units::DisplayUnit;
