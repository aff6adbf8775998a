//! Element selection workflow.
//!
//! Coordinates how a user picks one element from a rule-constrained pool
//! during character building and commits that choice to the owning
//! aggregate. The manager tracks live handlers per rule, the factory wires a
//! handler's collaborators, and the handler itself runs the
//! `Created → Initialized → Selected` workflow.

mod context;
mod error;
mod factory;
mod handler;
mod interactor;
mod manager;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::SelectionHandlerContext;
pub use error::SelectionHandlerError;
pub use factory::ElementSelectionHandlerFactory;
pub use handler::ElementSelectionHandler;
pub use interactor::ElementSelectionInteractor;
pub use manager::ElementSelectionHandlerManager;
