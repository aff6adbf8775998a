use crate::ids::HandlerId;

/// Collision-resistant handler id generation, abstracted so tests can
/// substitute a deterministic sequence.
pub trait IdGeneratorPort: Send + Sync {
    fn next_handler_id(&self) -> HandlerId;
}

/// Default generator backed by uuid v4.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGeneratorPort for UuidIdGenerator {
    fn next_handler_id(&self) -> HandlerId {
        HandlerId::new()
    }
}

#[cfg(test)]
mockall::mock! {
    pub IdGenerator {}

    impl IdGeneratorPort for IdGenerator {
        fn next_handler_id(&self) -> HandlerId;
    }
}
