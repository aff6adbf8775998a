use std::sync::Arc;

use cg_core::ports::{
    AggregateRegistrationProviderPort, ElementDataProviderPort, SelectionPresenterFactoryPort,
};

use super::context::SelectionHandlerContext;
use super::handler::ElementSelectionHandler;

/// Assembles a handler's collaborators from a context.
pub struct ElementSelectionHandlerFactory {
    data_provider: Arc<dyn ElementDataProviderPort>,
    registration_provider: Arc<dyn AggregateRegistrationProviderPort>,
    presenter_factory: Arc<dyn SelectionPresenterFactoryPort>,
}

impl ElementSelectionHandlerFactory {
    /// * `data_provider` - selection data provider for getting rule elements
    /// * `registration_provider` - where to register the element once it has
    ///   been selected, e.g. the character manager
    /// * `presenter_factory` - creates a presenter for the handler; the
    ///   implementation will be something like a view model in the
    ///   presentation layer of the app
    pub fn new(
        data_provider: Arc<dyn ElementDataProviderPort>,
        registration_provider: Arc<dyn AggregateRegistrationProviderPort>,
        presenter_factory: Arc<dyn SelectionPresenterFactoryPort>,
    ) -> Self {
        Self {
            data_provider,
            registration_provider,
            presenter_factory,
        }
    }

    /// Build a fully wired handler for the context.
    ///
    /// The presenter is created here, with its element-category filter set
    /// from the context's rule, and a registration manager is obtained from
    /// the provider. The returned handler is NOT initialized: no data is
    /// fetched until `initialize` runs, so callers can create handlers for
    /// many rules cheaply. Collaborator failures propagate unchanged.
    pub fn create(
        &self,
        context: SelectionHandlerContext,
    ) -> anyhow::Result<Arc<ElementSelectionHandler>> {
        let category = context.rule().category().to_string();
        let presenter = self
            .presenter_factory
            .create_presenter(Box::new(move |configuration| {
                configuration.element_category = category;
            }))?;
        let registration = self.registration_provider.aggregate_registration_manager();

        Ok(Arc::new(ElementSelectionHandler::new(
            context,
            self.data_provider.clone(),
            registration,
            presenter,
        )))
    }
}
