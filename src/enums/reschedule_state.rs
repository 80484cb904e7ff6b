use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RescheduleState {
    Closed,
    LoadingSlots,
    Ready,
    Submitting,
}

impl RescheduleState {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}
