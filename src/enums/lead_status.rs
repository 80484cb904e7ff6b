use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::ArcdeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    New,
    FollowUp,
    Complete,
    /// Any status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl LeadStatus {
    /// Statuses an operator can set; `Unknown` is only ever received.
    pub const ALL: [Self; 3] = [Self::New, Self::FollowUp, Self::Complete];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::FollowUp => "follow-up",
            Self::Complete => "complete",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::FollowUp => "Follow-up",
            Self::Complete => "Complete",
            Self::Unknown => "N/A",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::New => "Lead has just been received",
            Self::FollowUp => "Lead requires follow-up action",
            Self::Complete => "Lead has been fully processed",
            Self::Unknown => "Status not recognized by this client",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ArcdeskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                ArcdeskError::validation_error(
                    "status",
                    value,
                    "Unknown lead status",
                    Some("Use one of: new, follow-up, complete"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_status() {
        assert_eq!("follow-up".parse::<LeadStatus>().unwrap(), LeadStatus::FollowUp);
        assert_eq!(" Complete ".parse::<LeadStatus>().unwrap(), LeadStatus::Complete);
        assert!("archived".parse::<LeadStatus>().is_err());
        assert!("unknown".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn unlisted_backend_value_becomes_unknown() {
        let status: LeadStatus = serde_json::from_str("\"contacted\"").unwrap();
        assert_eq!(status, LeadStatus::Unknown);
        assert_eq!(status.label(), "N/A");
    }

    #[test]
    fn serializes_as_backend_value() {
        let json = serde_json::to_string(&LeadStatus::FollowUp).unwrap();
        assert_eq!(json, "\"follow-up\"");
    }
}
