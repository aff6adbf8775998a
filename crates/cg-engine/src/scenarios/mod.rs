//! Scenario orchestration.

pub mod element_selection;

mod scenario;

pub use scenario::ScenarioCoordinator;
