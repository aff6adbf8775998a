//! Element domain model.
//!
//! An element is a single unit of authored game content: a language, a skill,
//! a piece of equipment. Elements belong to a category and carry an open bag
//! of capability components. The engine borrows elements from a data provider;
//! it never authors or persists them.

mod builder;
mod component;

pub use builder::{ElementBuilder, ElementDraft};
pub use component::{ComponentMap, DisplayNameComponent, ElementComponent};

use crate::ids::ElementId;

/// A unit of authored content belonging to one category.
#[derive(Debug)]
pub struct Element {
    identifier: ElementId,
    name: String,
    category: String,
    components: ComponentMap,
}

impl Element {
    pub fn new(
        identifier: ElementId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            category: category.into(),
            components: ComponentMap::new(),
        }
    }

    pub fn identifier(&self) -> &ElementId {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category tag this element is authored under, e.g. "Language".
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Attach a capability component, returning self for chaining.
    pub fn with_component<T: ElementComponent>(mut self, component: T) -> Self {
        self.components.add_component(component);
        self
    }

    pub fn add_component<T: ElementComponent>(&mut self, component: T) {
        self.components.add_component(component);
    }

    /// Look up an attached component by type, if present.
    pub fn try_get_component<T: ElementComponent>(&self) -> Option<&T> {
        self.components.get_component::<T>()
    }
}
