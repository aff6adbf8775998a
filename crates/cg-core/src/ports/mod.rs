//! Port interfaces for the engine layer
//!
//! Ports define the contract between the selection workflow logic and its
//! external collaborators. This follows Hexagonal Architecture principles:
//! the workflow core stays independent of how elements are stored, how
//! options are rendered, and who owns the receiving aggregate root.

pub mod data_provider;
pub mod id_generator;
pub mod presenter;
pub mod registration;

pub use data_provider::{ElementDataProviderPort, ElementPredicate};
pub use id_generator::{IdGeneratorPort, UuidIdGenerator};
pub use presenter::{
    PresenterConfiguration, SelectionPresenterFactoryPort, SelectionPresenterPort,
};
pub use registration::{AggregateRegistrationPort, AggregateRegistrationProviderPort};
