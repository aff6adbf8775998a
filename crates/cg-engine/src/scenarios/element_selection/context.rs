use cg_core::ids::HandlerId;
use cg_core::ports::IdGeneratorPort;
use cg_core::selection::SelectionRule;

/// Immutable pairing of a generated handler id and the rule the handler is
/// scoped to. Created once per handler and owned by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHandlerContext {
    identifier: HandlerId,
    rule: SelectionRule,
}

impl SelectionHandlerContext {
    /// Create a new context with a freshly generated identifier.
    pub fn create(rule: SelectionRule, id_generator: &dyn IdGeneratorPort) -> Self {
        Self {
            identifier: id_generator.next_handler_id(),
            rule,
        }
    }

    /// Unique identifier of the handler this context describes.
    pub fn identifier(&self) -> &HandlerId {
        &self.identifier
    }

    /// The selection rule the handler is scoped to.
    pub fn rule(&self) -> &SelectionRule {
        &self.rule
    }
}
