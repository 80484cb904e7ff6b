use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    #[value(name = "PENDING", alias = "pending")]
    Pending,
    #[value(name = "COMPLETED", alias = "completed")]
    Completed,
    #[value(name = "FAILED", alias = "failed")]
    Failed,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl TransactionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Unknown => "N/A",
        }
    }

    /// "COMPLETED" -> "Completed", the way rows are labelled in reports.
    pub fn label(self) -> String {
        if self == Self::Unknown {
            return "N/A".to_string();
        }
        let raw = self.as_str();
        let mut label = raw[..1].to_string();
        label.push_str(&raw[1..].to_lowercase());
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_not_offered_as_a_filter() {
        assert!(TransactionStatus::Unknown.to_possible_value().is_none());
        assert!(TransactionStatus::from_str("unknown", true).is_err());
        assert_eq!(TransactionStatus::from_str("pending", true), Ok(TransactionStatus::Pending));
    }
}
