//! Document model: elements, their kinds and locations, and the in-memory store.
//!
//! `Element` is the candidate object the session picks. It exposes exactly
//! what the matchers read and write: a kind tag for filtering, a `Location`
//! for geometry, and a `DimensionText` record for annotation fields.
//! `DocStore` is a host document kept in memory. It records the original of
//! every element touched inside an open transaction so a rollback can restore
//! it, and validates touched elements on commit.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MatchError;
use crate::geom::{Point3, Segment};
use crate::host::Document;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Stable object-kind tag used for filter and adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Linear or angular dimension annotation.
    Dimension,
    /// Pipe segment.
    Pipe,
    /// Duct segment.
    Duct,
    /// Cable tray run.
    CableTray,
    /// Conduit run.
    Conduit,
    /// Flexible duct.
    FlexDuct,
    /// Flexible pipe.
    FlexPipe,
    /// Wall (never matched; present so filters have something to reject).
    Wall,
    /// Anything else.
    Generic,
}

/// Kinds whose centerline can carry a matched elevation.
pub const MEP_CURVE_KINDS: [ElementKind; 6] = [
    ElementKind::Pipe,
    ElementKind::Duct,
    ElementKind::CableTray,
    ElementKind::Conduit,
    ElementKind::FlexDuct,
    ElementKind::FlexPipe,
];

impl ElementKind {
    /// Whether this kind is one of the MEP curve categories.
    #[must_use]
    pub fn is_mep_curve(self) -> bool {
        MEP_CURVE_KINDS.contains(&self)
    }
}

/// Where an element sits in the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Location {
    /// No placement (annotations, view-specific elements).
    #[default]
    None,
    /// Point-based placement.
    Point { point: Point3 },
    /// Bounded straight centerline.
    Line { segment: Segment },
    /// Circular arc centerline.
    Arc { center: Point3, radius: f64, start: Point3, end: Point3 },
    /// Multi-vertex path (splines are flattened by the host).
    Path { points: Vec<Point3> },
}

impl Location {
    /// Short name of the location shape, for error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Point { .. } => "point",
            Self::Line { .. } => "line",
            Self::Arc { .. } => "arc",
            Self::Path { .. } => "path",
        }
    }

    /// The bounded line segment, if this location is one.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedGeometry` naming the actual shape otherwise.
    pub fn as_line(&self) -> Result<&Segment, MatchError> {
        match self {
            Self::Line { segment } => Ok(segment),
            other => Err(MatchError::UnsupportedGeometry { shape: other.shape() }),
        }
    }
}

/// The four text fields of a dimension. `Some("")` and `None` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionText {
    #[serde(default)]
    pub above: Option<String>,
    #[serde(default)]
    pub below: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl DimensionText {
    /// True when every field is absent or empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.above, &self.below, &self.prefix, &self.suffix]
            .into_iter()
            .all(|f| f.as_deref().is_none_or(str::is_empty))
    }
}

/// An element as stored in the document and in model snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Human-facing mark, used by text pick front ends.
    #[serde(default)]
    pub name: String,
    /// Kind tag.
    pub kind: ElementKind,
    /// Placement geometry.
    #[serde(default)]
    pub location: Location,
    /// Annotation text fields (meaningful for dimensions).
    #[serde(default)]
    pub text: DimensionText,
}

impl Element {
    /// Create an element with a fresh id, no location, and blank text.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            location: Location::None,
            text: DimensionText::default(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: DimensionText) -> Self {
        self.text = text;
        self
    }

    /// Check the element is something the host could regenerate.
    fn validate(&self) -> Result<(), MatchError> {
        match &self.location {
            Location::Line { segment } => segment.validate(),
            _ => Ok(()),
        }
    }
}

#[derive(Debug)]
struct OpenTransaction {
    label: String,
    originals: HashMap<ElementId, Element>,
}

/// In-memory host document.
#[derive(Debug)]
pub struct DocStore {
    elements: HashMap<ElementId, Element>,
    open: Option<OpenTransaction>,
    history: Vec<String>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: HashMap::new(), open: None, history: Vec::new() }
    }

    /// Insert or replace an element outside any transaction.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id, element);
    }

    /// Replace all elements with a full snapshot.
    pub fn load_snapshot(&mut self, elements: Vec<Element>) {
        self.elements.clear();
        self.open = None;
        for element in elements {
            self.elements.insert(element.id, element);
        }
    }

    /// Parse a JSON array of elements into a fresh store.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed input or degenerate segments.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        let mut store = Self::new();
        store.load_snapshot(elements);
        Ok(store)
    }

    /// All elements sorted by `(name, id)` for stable output.
    #[must_use]
    pub fn snapshot(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.values().collect();
        elements.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        elements
    }

    /// Labels of committed transactions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn restore(&mut self, originals: HashMap<ElementId, Element>) {
        for (id, original) in originals {
            self.elements.insert(id, original);
        }
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for DocStore {
    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, MatchError> {
        let Some(txn) = self.open.as_mut() else {
            return Err(MatchError::NoActiveTransaction);
        };
        let element = self.elements.get_mut(&id).ok_or(MatchError::ElementNotFound(id))?;
        txn.originals.entry(id).or_insert_with(|| element.clone());
        Ok(element)
    }

    fn begin_transaction(&mut self, label: &str) -> Result<(), MatchError> {
        if let Some(txn) = &self.open {
            return Err(MatchError::TransactionActive(txn.label.clone()));
        }
        self.open = Some(OpenTransaction { label: label.to_string(), originals: HashMap::new() });
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<(), MatchError> {
        let txn = self.open.take().ok_or(MatchError::NoActiveTransaction)?;

        let invalid = txn
            .originals
            .keys()
            .filter_map(|id| self.elements.get(id))
            .find_map(|e| e.validate().err().map(|err| (e.id, err)));
        if let Some((id, err)) = invalid {
            self.restore(txn.originals);
            return Err(MatchError::HostMutation(format!("{}: element {id}: {err}", txn.label)));
        }

        self.history.push(txn.label);
        Ok(())
    }

    fn rollback_transaction(&mut self) {
        if let Some(txn) = self.open.take() {
            self.restore(txn.originals);
        }
    }
}
