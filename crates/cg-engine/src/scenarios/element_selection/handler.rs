//! Element selection handler.
//!
//! Owns one in-progress selection workflow: fetches candidate elements,
//! drives the presenter, accepts a pick and registers the resulting
//! aggregate with the owning side.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use cg_core::element::Element;
use cg_core::ids::{ElementId, HandlerId};
use cg_core::ports::{
    AggregateRegistrationPort, ElementDataProviderPort, SelectionPresenterPort,
};
use cg_core::selection::{
    ElementAggregate, SelectionOption, SelectionPhase, SelectionProvenance, SelectionRule,
};

use super::context::SelectionHandlerContext;
use super::error::SelectionHandlerError;
use super::interactor::ElementSelectionInteractor;

/// Mutable workflow state, all behind one lock.
///
/// Holding the lock across collaborator awaits in register/unregister is what
/// guarantees at most one in-flight registration per handler.
struct HandlerState {
    phase: SelectionPhase,
    /// Elements on loan from the data provider for this initialization.
    candidates: Vec<Arc<Element>>,
    /// The option set last pushed to the presenter; register resolves
    /// against exactly this set.
    options: Vec<SelectionOption>,
    /// The aggregate currently registered, if any.
    selected: Option<Arc<ElementAggregate>>,
}

/// Handler for one element selection workflow.
///
/// Constructed fully wired but inert: nothing is fetched and nothing is
/// pushed to the presenter until [`initialize`](Self::initialize) runs.
/// Presentation code drives picks through the narrower
/// [`ElementSelectionInteractor`] view and cannot reach `initialize`.
pub struct ElementSelectionHandler {
    context: SelectionHandlerContext,
    data_provider: Arc<dyn ElementDataProviderPort>,
    registration: Arc<dyn AggregateRegistrationPort>,
    presenter: Arc<dyn SelectionPresenterPort>,
    state: Mutex<HandlerState>,
}

impl ElementSelectionHandler {
    pub fn new(
        context: SelectionHandlerContext,
        data_provider: Arc<dyn ElementDataProviderPort>,
        registration: Arc<dyn AggregateRegistrationPort>,
        presenter: Arc<dyn SelectionPresenterPort>,
    ) -> Self {
        Self {
            context,
            data_provider,
            registration,
            presenter,
            state: Mutex::new(HandlerState {
                phase: SelectionPhase::Created,
                candidates: Vec::new(),
                options: Vec::new(),
                selected: None,
            }),
        }
    }

    pub fn unique_identifier(&self) -> &HandlerId {
        self.context.identifier()
    }

    pub fn rule(&self) -> &SelectionRule {
        self.context.rule()
    }

    /// Narrow capability view for presentation-layer code.
    pub fn interactor(self: Arc<Self>) -> Arc<dyn ElementSelectionInteractor> {
        self
    }

    /// Fetch candidate elements for the bound rule and push them to the
    /// presenter, header first, then options.
    ///
    /// Valid only once, from the `Created` phase; a repeated call is an
    /// invalid state transition rather than a silent re-query.
    pub async fn initialize(&self) -> Result<(), SelectionHandlerError> {
        let mut state = self.state.lock().await;
        if !state.phase.can_initialize() {
            return Err(SelectionHandlerError::InvalidStateTransition {
                operation: "initialize",
                phase: state.phase,
            });
        }

        let rule = self.context.rule();
        let elements = self
            .data_provider
            .get_elements(&|element| rule.matches(element.category()))?;

        let candidates: Vec<Arc<Element>> = elements.into_iter().map(Arc::new).collect();
        let options: Vec<SelectionOption> = candidates
            .iter()
            .map(|element| SelectionOption::from(element.as_ref()))
            .collect();

        // The presenter renders a title before populating choices, so the
        // header push must come first.
        self.presenter.update_header(&rule.header()).await?;
        self.presenter.update_selection_options(&options).await?;

        debug!(
            handler = %self.context.identifier(),
            rule = %rule,
            options = options.len(),
            "selection options presented"
        );

        state.candidates = candidates;
        state.options = options;
        self.transition(&mut state, SelectionPhase::Initialized);
        Ok(())
    }

    pub(super) async fn register(
        &self,
        option_id: &ElementId,
    ) -> Result<(), SelectionHandlerError> {
        let mut state = self.state.lock().await;
        if !state.phase.can_register() {
            return Err(SelectionHandlerError::InvalidStateTransition {
                operation: "register",
                phase: state.phase,
            });
        }

        // Resolve against the last pushed option set; the registration
        // manager must not be reached for an unknown identifier.
        if !state
            .options
            .iter()
            .any(|option| option.identifier() == option_id)
        {
            return Err(SelectionHandlerError::OptionNotFound(option_id.clone()));
        }
        let element = state
            .candidates
            .iter()
            .find(|candidate| candidate.identifier() == option_id)
            .cloned()
            .ok_or_else(|| SelectionHandlerError::OptionNotFound(option_id.clone()))?;

        let aggregate = Arc::new(ElementAggregate::new(
            element,
            SelectionProvenance {
                handler_id: self.context.identifier().clone(),
                rule: self.context.rule().clone(),
                selected_at: Utc::now(),
            },
        ));

        self.registration.register(aggregate.clone()).await?;

        state.selected = Some(aggregate);
        self.transition(&mut state, SelectionPhase::Selected);
        Ok(())
    }

    pub(super) async fn unregister(&self) -> Result<(), SelectionHandlerError> {
        let mut state = self.state.lock().await;
        if !state.phase.can_unregister() {
            return Err(SelectionHandlerError::InvalidStateTransition {
                operation: "unregister",
                phase: state.phase,
            });
        }
        let Some(aggregate) = state.selected.clone() else {
            return Err(SelectionHandlerError::InvalidStateTransition {
                operation: "unregister",
                phase: state.phase,
            });
        };

        self.registration.unregister(&aggregate).await?;

        state.selected = None;
        self.transition(&mut state, SelectionPhase::Initialized);
        Ok(())
    }

    fn transition(&self, state: &mut HandlerState, next: SelectionPhase) {
        info!(
            handler = %self.context.identifier(),
            from = ?state.phase,
            to = ?next,
            "selection phase transition"
        );
        state.phase = next;
    }

    /// Current workflow phase. Primarily for orchestration-side bookkeeping.
    pub async fn phase(&self) -> SelectionPhase {
        self.state.lock().await.phase
    }
}

#[async_trait::async_trait]
impl ElementSelectionInteractor for ElementSelectionHandler {
    async fn register(&self, option_id: &ElementId) -> Result<(), SelectionHandlerError> {
        ElementSelectionHandler::register(self, option_id).await
    }

    async fn unregister(&self) -> Result<(), SelectionHandlerError> {
        ElementSelectionHandler::unregister(self).await
    }
}
