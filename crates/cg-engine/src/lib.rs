//! Character Generation Orchestration Layer
//!
//! This crate contains the selection workflow use cases and runtime
//! orchestration built on top of the `cg-core` domain model.

pub mod scenarios;

pub use scenarios::element_selection::{
    ElementSelectionHandler, ElementSelectionHandlerFactory, ElementSelectionHandlerManager,
    ElementSelectionInteractor, SelectionHandlerContext, SelectionHandlerError,
};
pub use scenarios::ScenarioCoordinator;
