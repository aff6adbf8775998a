use serde::{Deserialize, Serialize};

/// Selection workflow state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and transition validation logic. Side effects (data provider
/// queries, presenter pushes, registration calls) are driven by the handler
/// in the engine layer.
///
/// State transitions:
/// ```text
/// Created
///  │ initialize
///  ▼
/// Initialized ◄──────────────┐
///  │ register(option)        │ unregister
///  ▼                         │
/// Selected ──────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Handler constructed, collaborators wired, no data fetched yet
    Created,

    /// Candidate elements fetched and pushed to the presenter
    Initialized,

    /// An aggregate has been registered for the picked option
    Selected,
}

impl SelectionPhase {
    /// Check whether `initialize` is valid from this phase
    pub fn can_initialize(self) -> bool {
        matches!(self, Self::Created)
    }

    /// Check whether `register` is valid from this phase
    pub fn can_register(self) -> bool {
        matches!(self, Self::Initialized)
    }

    /// Check whether `unregister` is valid from this phase
    pub fn can_unregister(self) -> bool {
        matches!(self, Self::Selected)
    }

    /// Get the next phase after a successful initialize
    pub fn on_initialized(self) -> Option<Self> {
        match self {
            Self::Created => Some(Self::Initialized),
            _ => None,
        }
    }

    /// Get the next phase after a successful register
    pub fn on_registered(self) -> Option<Self> {
        match self {
            Self::Initialized => Some(Self::Selected),
            _ => None,
        }
    }

    /// Get the next phase after a successful unregister
    pub fn on_unregistered(self) -> Option<Self> {
        match self {
            Self::Selected => Some(Self::Initialized),
            _ => None,
        }
    }
}
