use serde::{Deserialize, Serialize};

/// Identifier of a domain element.
///
/// Element identifiers are assigned by whoever authors the element data;
/// the engine never generates them, it only resolves against them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

crate::ids::id_macro::impl_id!(ElementId);
