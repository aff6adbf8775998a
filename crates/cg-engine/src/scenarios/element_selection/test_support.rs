//! Hand-rolled recording doubles for the selection workflow ports.
//!
//! These record every call so tests can assert ordering, call counts and
//! instance identity, which plain return-value mocks cannot express.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cg_core::element::{Element, ElementBuilder};
use cg_core::ids::ElementId;
use cg_core::ports::{
    AggregateRegistrationPort, AggregateRegistrationProviderPort, ElementDataProviderPort,
    ElementPredicate, PresenterConfiguration, SelectionPresenterFactoryPort,
    SelectionPresenterPort,
};
use cg_core::selection::{ElementAggregate, SelectionOption};

/// The language elements used across the selection tests.
pub fn language_elements() -> Vec<Element> {
    let builder = ElementBuilder::new();
    ["Common", "Undercommon", "Elvish", "Druidic"]
        .iter()
        .enumerate()
        .map(|(index, name)| {
            builder.compose(|element| {
                element.identifier = Some(ElementId::from(format!("ID_{}", index + 1)));
                element.name = name.to_string();
                element.category = "Language".to_string();
            })
        })
        .collect()
}

/// Data provider serving elements from a supply closure, counting queries.
pub struct StaticDataProvider {
    supply: Box<dyn Fn() -> Vec<Element> + Send + Sync>,
    calls: AtomicUsize,
}

impl StaticDataProvider {
    pub fn new<F>(supply: F) -> Self
    where
        F: Fn() -> Vec<Element> + Send + Sync + 'static,
    {
        Self {
            supply: Box::new(supply),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ElementDataProviderPort for StaticDataProvider {
    fn get_elements(&self, predicate: ElementPredicate<'_>) -> anyhow::Result<Vec<Element>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.supply)()
            .into_iter()
            .filter(|element| predicate(element))
            .collect())
    }
}

/// Presenter recording every push in arrival order.
#[derive(Default)]
pub struct RecordingPresenter {
    headers: Mutex<Vec<String>>,
    options: Mutex<Vec<SelectionOption>>,
    events: Mutex<Vec<&'static str>>,
}

impl RecordingPresenter {
    pub fn headers(&self) -> Vec<String> {
        self.headers.lock().unwrap().clone()
    }

    pub fn pushed_options(&self) -> Vec<SelectionOption> {
        self.options.lock().unwrap().clone()
    }

    pub fn header_pushed_before_options(&self) -> bool {
        *self.events.lock().unwrap() == vec!["header", "options"]
    }
}

#[async_trait]
impl SelectionPresenterPort for RecordingPresenter {
    async fn update_header(&self, text: &str) -> anyhow::Result<()> {
        self.headers.lock().unwrap().push(text.to_string());
        self.events.lock().unwrap().push("header");
        Ok(())
    }

    async fn update_selection_options(
        &self,
        options: &[SelectionOption],
    ) -> anyhow::Result<()> {
        self.options.lock().unwrap().extend_from_slice(options);
        self.events.lock().unwrap().push("options");
        Ok(())
    }
}

/// Presenter factory recording the configuration each presenter was created
/// with; optionally failing to exercise propagation.
#[derive(Default)]
pub struct RecordingPresenterFactory {
    categories: Mutex<Vec<String>>,
    presenters: Mutex<Vec<Arc<RecordingPresenter>>>,
    fail: bool,
}

impl RecordingPresenterFactory {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.presenters.lock().unwrap().len()
    }

    pub fn configured_categories(&self) -> Vec<String> {
        self.categories.lock().unwrap().clone()
    }
}

impl SelectionPresenterFactoryPort for RecordingPresenterFactory {
    fn create_presenter(
        &self,
        configure: Box<dyn FnOnce(&mut PresenterConfiguration) + Send>,
    ) -> anyhow::Result<Arc<dyn SelectionPresenterPort>> {
        if self.fail {
            anyhow::bail!("presenter backend unavailable");
        }
        let mut configuration = PresenterConfiguration::default();
        configure(&mut configuration);
        self.categories
            .lock()
            .unwrap()
            .push(configuration.element_category);

        let presenter = Arc::new(RecordingPresenter::default());
        self.presenters.lock().unwrap().push(presenter.clone());
        Ok(presenter)
    }
}

/// Registration manager recording the exact aggregate instances it saw.
#[derive(Default)]
pub struct RecordingRegistration {
    registered: Mutex<Vec<Arc<ElementAggregate>>>,
    unregistered: Mutex<Vec<Arc<ElementAggregate>>>,
    fail: bool,
}

impl RecordingRegistration {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn registered(&self) -> Vec<Arc<ElementAggregate>> {
        self.registered.lock().unwrap().clone()
    }

    pub fn unregistered(&self) -> Vec<Arc<ElementAggregate>> {
        self.unregistered.lock().unwrap().clone()
    }
}

#[async_trait]
impl AggregateRegistrationPort for RecordingRegistration {
    async fn register(&self, aggregate: Arc<ElementAggregate>) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("generation manager rejected the registration");
        }
        self.registered.lock().unwrap().push(aggregate);
        Ok(())
    }

    async fn unregister(&self, aggregate: &ElementAggregate) -> anyhow::Result<()> {
        // Resolve back to the registered Arc so instance identity is
        // observable in assertions.
        let registered = self.registered.lock().unwrap();
        let instance = registered
            .iter()
            .find(|a| std::ptr::eq(a.as_ref(), aggregate))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("aggregate was never registered"))?;
        drop(registered);
        self.unregistered.lock().unwrap().push(instance);
        Ok(())
    }
}

/// Provider handing out one shared recording registration manager.
#[derive(Default)]
pub struct RecordingRegistrationProvider {
    manager: Arc<RecordingRegistration>,
}

impl RecordingRegistrationProvider {
    pub fn manager(&self) -> Arc<RecordingRegistration> {
        self.manager.clone()
    }
}

impl AggregateRegistrationProviderPort for RecordingRegistrationProvider {
    fn aggregate_registration_manager(&self) -> Arc<dyn AggregateRegistrationPort> {
        self.manager.clone()
    }
}
