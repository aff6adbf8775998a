//! Element data provider port
//!
//! Supplies candidate elements for a selection workflow. Implementations are
//! provided by the infrastructure layer (e.g. a content database or bundled
//! ruleset files).

use crate::element::Element;

/// Predicate over elements, supplied by the querying side so providers can
/// filter at the source instead of shipping whole categories.
pub type ElementPredicate<'a> = &'a (dyn Fn(&Element) -> bool + Send + Sync);

pub trait ElementDataProviderPort: Send + Sync {
    /// Get all elements matching the predicate.
    ///
    /// Side-effect free; may be called any number of times.
    fn get_elements(&self, predicate: ElementPredicate<'_>) -> anyhow::Result<Vec<Element>>;
}
