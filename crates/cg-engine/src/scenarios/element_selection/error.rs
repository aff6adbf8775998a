use cg_core::ids::ElementId;
use cg_core::selection::SelectionPhase;

/// Errors produced by a selection handler.
///
/// Collaborator faults pass through transparently so callers can tell domain
/// errors from infrastructure errors and downcast to the underlying fault.
#[derive(Debug, thiserror::Error)]
pub enum SelectionHandlerError {
    #[error("{operation} is not valid in the {phase:?} phase")]
    InvalidStateTransition {
        operation: &'static str,
        phase: SelectionPhase,
    },

    #[error("no selection option with identifier {0}")]
    OptionNotFound(ElementId),

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
