//! Error type shared by capture, apply, and the document seam.

use crate::doc::{ElementId, ElementKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("source element {0} has nothing to copy")]
    NoCapturableData(ElementId),
    #[error("unsupported geometry: location is {shape}, expected a bounded line")]
    UnsupportedGeometry { shape: &'static str },
    #[error("degenerate segment: start and end coincide")]
    DegenerateSegment,
    #[error("element {id} is a {kind:?}, which this tool cannot pick")]
    KindNotSelectable { id: ElementId, kind: ElementKind },
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),
    #[error("host rejected the change: {0}")]
    HostMutation(String),
    #[error("a transaction is already open: {0}")]
    TransactionActive(String),
    #[error("no transaction is open")]
    NoActiveTransaction,
}

impl MatchError {
    /// Stable machine-readable code for logs and reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCapturableData(_) => "E_NO_CAPTURABLE_DATA",
            Self::UnsupportedGeometry { .. } => "E_UNSUPPORTED_GEOMETRY",
            Self::DegenerateSegment => "E_DEGENERATE_SEGMENT",
            Self::KindNotSelectable { .. } => "E_KIND_NOT_SELECTABLE",
            Self::ElementNotFound(_) => "E_ELEMENT_NOT_FOUND",
            Self::HostMutation(_) => "E_HOST_MUTATION",
            Self::TransactionActive(_) => "E_TRANSACTION_ACTIVE",
            Self::NoActiveTransaction => "E_NO_ACTIVE_TRANSACTION",
        }
    }
}
