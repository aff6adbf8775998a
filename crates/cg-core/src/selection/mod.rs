//! Selection domain types.
//!
//! Value types shared by the element selection workflow: the rule naming the
//! target category, the presentation-facing option projection, the committed
//! aggregate, and the pure workflow state machine.

mod aggregate;
mod option;
mod phase;
mod rule;

pub use aggregate::{ElementAggregate, SelectionProvenance};
pub use option::SelectionOption;
pub use phase::SelectionPhase;
pub use rule::SelectionRule;
