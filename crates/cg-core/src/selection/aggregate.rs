use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::element::Element;
use crate::ids::HandlerId;
use crate::selection::SelectionRule;

/// Where an aggregate came from: which handler, under which rule, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionProvenance {
    pub handler_id: HandlerId,
    pub rule: SelectionRule,
    pub selected_at: DateTime<Utc>,
}

/// The committed result of a selection.
///
/// Wraps the chosen element together with its provenance. Once handed to a
/// registration manager the aggregate is owned by the receiving side; the
/// handler keeps an `Arc` to the same instance so a later unregister request
/// names exactly what was registered.
#[derive(Debug)]
pub struct ElementAggregate {
    element: Arc<Element>,
    provenance: SelectionProvenance,
}

impl ElementAggregate {
    pub fn new(element: Arc<Element>, provenance: SelectionProvenance) -> Self {
        Self {
            element,
            provenance,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn provenance(&self) -> &SelectionProvenance {
        &self.provenance
    }
}
