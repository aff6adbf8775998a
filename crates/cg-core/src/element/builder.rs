//! Closure-configured element construction.

use crate::element::Element;
use crate::ids::ElementId;

/// Mutable draft handed to the composing closure.
#[derive(Debug, Default)]
pub struct ElementDraft {
    pub identifier: Option<ElementId>,
    pub name: String,
    pub category: String,
}

/// Builder that composes elements through a configuration closure, so call
/// sites read like the element data they describe.
#[derive(Debug, Default)]
pub struct ElementBuilder;

impl ElementBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Compose a new element. Fields left unset by the closure fall back to
    /// defaults; a missing identifier gets a generated one.
    pub fn compose<F>(&self, configure: F) -> Element
    where
        F: FnOnce(&mut ElementDraft),
    {
        let mut draft = ElementDraft::default();
        configure(&mut draft);

        Element::new(
            draft.identifier.unwrap_or_default(),
            draft.name,
            draft.category,
        )
    }
}
