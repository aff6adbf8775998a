//! # cg-core
//!
//! Core domain models and business logic for the character generation engine.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod element;
pub mod ids;
pub mod ports;
pub mod scenario;
pub mod selection;

// Re-export commonly used types at the crate root
pub use element::{Element, ElementBuilder, ElementComponent};
pub use ids::{ElementId, HandlerId};
pub use scenario::{ScenarioDefinition, ScenarioDefinitionError};
pub use selection::{ElementAggregate, SelectionOption, SelectionPhase, SelectionRule};
