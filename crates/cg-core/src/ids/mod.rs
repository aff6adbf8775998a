//! Identifier newtypes used across the engine.

mod element_id;
mod handler_id;
pub(crate) mod id_macro;

pub use element_id::ElementId;
pub use handler_id::HandlerId;
