//! Open capability components attached to elements.
//!
//! Elements carry an open-ended bag of components so that content authors can
//! attach capabilities (proficiencies, equipment stats, spellcasting data)
//! without the engine knowing about them up front. The engine itself only
//! ever looks components up by their concrete type.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Marker trait for element capability components.
///
/// Components are plain data carriers; behavior stays in the layer that
/// knows the concrete type.
pub trait ElementComponent: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Blanket implementation so component types only need to be plain structs.
impl<T: Any + Send + Sync> ElementComponent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Components that contribute a human readable name, e.g. equipment
/// components that decorate the base element name with enhancements.
pub trait DisplayNameComponent: ElementComponent {
    fn display_name(&self) -> String;
}

/// Type-keyed component storage.
///
/// At most one component per concrete type; adding a second replaces the
/// first, matching how element data is authored (a capability is a fact
/// about the element, not a list).
#[derive(Default)]
pub struct ComponentMap {
    components: HashMap<TypeId, Box<dyn ElementComponent>>,
}

impl ComponentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component, replacing an existing one of the same type.
    pub fn add_component<T: ElementComponent>(&mut self, component: T) {
        self.components
            .insert(TypeId::of::<T>(), Box::new(component));
    }

    /// Look up a component by concrete type.
    pub fn get_component<T: ElementComponent>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentMap")
            .field("len", &self.components.len())
            .finish()
    }
}
