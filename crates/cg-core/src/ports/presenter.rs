//! Selection presenter ports
//!
//! The presenter is the engine's one-way window into the presentation layer:
//! the handler pushes a header and an option list, and never reads anything
//! back. User intent returns through the interactor surface instead.

use std::sync::Arc;

use async_trait::async_trait;

use crate::selection::SelectionOption;

/// Configuration the engine applies before a presenter is handed out.
///
/// The implementation will be something like a view model in the
/// presentation layer of the app; the category filter tells it which kind of
/// element it is about to present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterConfiguration {
    /// Category of elements this presenter will show, e.g. "Language".
    pub element_category: String,
}

#[async_trait]
pub trait SelectionPresenterPort: Send + Sync {
    /// Update the header rendered above the option list.
    async fn update_header(&self, text: &str) -> anyhow::Result<()>;

    /// Replace the rendered option list.
    async fn update_selection_options(
        &self,
        options: &[SelectionOption],
    ) -> anyhow::Result<()>;
}

/// Creates one presenter per selection handler.
pub trait SelectionPresenterFactoryPort: Send + Sync {
    /// Create a presenter, applying `configure` to its configuration before
    /// the presenter is returned.
    fn create_presenter(
        &self,
        configure: Box<dyn FnOnce(&mut PresenterConfiguration) + Send>,
    ) -> anyhow::Result<Arc<dyn SelectionPresenterPort>>;
}
