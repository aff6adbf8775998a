use async_trait::async_trait;

use cg_core::ids::ElementId;

use super::error::SelectionHandlerError;

/// Restricted capability surface for presentation-layer code.
///
/// Presenters report user intent through this view only; it deliberately
/// omits `initialize`, which belongs to orchestration code. Obtained from
/// [`ElementSelectionHandler::interactor`](super::ElementSelectionHandler::interactor).
#[async_trait]
pub trait ElementSelectionInteractor: Send + Sync {
    /// Commit the option the user picked.
    async fn register(&self, option_id: &ElementId) -> Result<(), SelectionHandlerError>;

    /// Reverse the currently committed pick.
    async fn unregister(&self) -> Result<(), SelectionHandlerError>;
}
