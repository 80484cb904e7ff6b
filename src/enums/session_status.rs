use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Scheduled,
    OnGoing,
    Completed,
    Cancelled,
    #[serde(alias = "reschedule")]
    Rescheduled,
    #[serde(other)]
    Unknown,
}

impl SessionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::OnGoing => "on-going",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Rescheduled => "rescheduled",
            Self::Unknown => "unknown",
        }
    }

    /// Cancelled and completed sessions can be neither joined nor rescheduled.
    pub const fn is_actionable(self) -> bool {
        !matches!(self, Self::Cancelled | Self::Completed)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::OnGoing => "On-going",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Rescheduled => "Rescheduled",
            Self::Unknown => "N/A",
        }
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
