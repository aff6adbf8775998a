//! Handler registry keyed by selection rule.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use cg_core::ports::IdGeneratorPort;
use cg_core::selection::SelectionRule;

use super::context::SelectionHandlerContext;
use super::factory::ElementSelectionHandlerFactory;
use super::handler::ElementSelectionHandler;

/// Registry of live selection handlers, at most one per rule.
///
/// The manager is the single source of truth for which rules currently have
/// an active selection; handlers never exist outside its bookkeeping once
/// created through it. Scope one manager per building session so independent
/// sessions do not interfere.
pub struct ElementSelectionHandlerManager {
    factory: ElementSelectionHandlerFactory,
    id_generator: Arc<dyn IdGeneratorPort>,
    /// The only shared mutable structure in this workflow; the lock
    /// serializes create/remove so the one-handler-per-rule invariant holds.
    handlers: Mutex<HashMap<SelectionRule, Arc<ElementSelectionHandler>>>,
}

impl ElementSelectionHandlerManager {
    pub fn new(
        factory: ElementSelectionHandlerFactory,
        id_generator: Arc<dyn IdGeneratorPort>,
    ) -> Self {
        Self {
            factory,
            id_generator,
            handlers: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create the handlers for a rule.
    ///
    /// When no handler exists for the rule, exactly one context + handler is
    /// built and stored. When one already exists, the existing handler is
    /// returned unchanged rather than replaced. The collection shape
    /// anticipates rules that fan out to multiple handlers ("pick N of
    /// category X"); a single-pick rule produces exactly one.
    pub async fn create(
        &self,
        rule: SelectionRule,
    ) -> anyhow::Result<Vec<Arc<ElementSelectionHandler>>> {
        let mut handlers = self.handlers.lock().await;
        if let Some(existing) = handlers.get(&rule) {
            debug!(rule = %rule, "selection already active, returning existing handler");
            return Ok(vec![existing.clone()]);
        }

        let context = SelectionHandlerContext::create(rule.clone(), self.id_generator.as_ref());
        let handler = self.factory.create(context)?;
        handlers.insert(rule, handler.clone());
        Ok(vec![handler])
    }

    /// Remove the handler for a rule, returning whether one was removed.
    ///
    /// This is registry bookkeeping only, not a domain-state rollback: the
    /// handler's aggregate is left as-is, so callers wanting clean teardown
    /// must unregister first.
    pub async fn remove(&self, rule: &SelectionRule) -> bool {
        self.handlers.lock().await.remove(rule).is_some()
    }

    /// Whether a selection is currently active for the rule.
    pub async fn is_active(&self, rule: &SelectionRule) -> bool {
        self.handlers.lock().await.contains_key(rule)
    }
}
