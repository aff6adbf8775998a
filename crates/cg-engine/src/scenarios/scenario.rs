//! Scenario coordination.
//!
//! Opens the selection workflows a scenario definition asks for. Handlers
//! are created up front but left uninitialized, so a scenario with many
//! rules stays cheap until each selection is actually activated.

use std::sync::Arc;

use tracing::info;

use cg_core::scenario::ScenarioDefinition;

use crate::scenarios::element_selection::{
    ElementSelectionHandler, ElementSelectionHandlerManager,
};

pub struct ScenarioCoordinator {
    manager: Arc<ElementSelectionHandlerManager>,
}

impl ScenarioCoordinator {
    pub fn new(manager: Arc<ElementSelectionHandlerManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<ElementSelectionHandlerManager> {
        &self.manager
    }

    /// Open one selection workflow per rule in the definition, in order.
    ///
    /// Rules already active keep their existing handler.
    pub async fn start(
        &self,
        definition: &ScenarioDefinition,
    ) -> anyhow::Result<Vec<Arc<ElementSelectionHandler>>> {
        let mut handlers = Vec::with_capacity(definition.rules.len());
        for rule in &definition.rules {
            handlers.extend(self.manager.create(rule.clone()).await?);
        }

        info!(
            scenario = %definition.name,
            handlers = handlers.len(),
            "scenario selections opened"
        );
        Ok(handlers)
    }
}
