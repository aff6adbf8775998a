use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::ids::ElementId;

/// Presentation-facing projection of a candidate element.
///
/// Decouples presenters from the element model: a presenter only ever needs
/// an identifier to report back and a label to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOption {
    identifier: ElementId,
    label: String,
}

impl SelectionOption {
    pub fn new(identifier: ElementId, label: impl Into<String>) -> Self {
        Self {
            identifier,
            label: label.into(),
        }
    }

    pub fn identifier(&self) -> &ElementId {
        &self.identifier
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&Element> for SelectionOption {
    fn from(element: &Element) -> Self {
        Self::new(element.identifier().clone(), element.name())
    }
}
