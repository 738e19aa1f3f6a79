use serde::Serialize;

/// At-most-once activation for lazily loaded subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ActivationLatch {
    #[default]
    Inactive,
    Active,
}

impl ActivationLatch {
    /// Flip to `Active`. Returns `true` only for the call that did the flip.
    pub fn trigger(&mut self) -> bool {
        match self {
            ActivationLatch::Inactive => {
                *self = ActivationLatch::Active;
                true
            }
            ActivationLatch::Active => false,
        }
    }

    pub fn is_active(&self) -> bool {
        *self == ActivationLatch::Active
    }
}
