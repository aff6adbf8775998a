use serde::{Deserialize, Serialize};

/// Unique identifier of one selection handler instance.
///
/// Generated once when a handler context is created and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerId(String);

crate::ids::id_macro::impl_id!(HandlerId);
