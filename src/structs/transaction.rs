use serde::{Deserialize, Serialize};
use crate::enums::transaction_status::TransactionStatus;
use crate::enums::transaction_type::TransactionType;
use crate::traits::searchable::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub transaction_code: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<TransactionType>,

    #[serde(default)]
    pub channel: Option<String>,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub status: Option<TransactionStatus>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.transaction_code.as_deref(),
            self.title.as_deref(),
            self.description.as_deref(),
            self.payment_method.as_deref(),
        ]
    }
}

/// One page of the server-side paginated ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page")]
    pub pages: u32,

    #[serde(default)]
    pub total: u64,
}

const fn default_page() -> u32 {
    1
}

/// Server-side filters for the ledger query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilters {
    pub kind: Option<TransactionType>,
    pub channel: Option<String>,
    pub status: Option<TransactionStatus>,
}

impl TransactionFilters {
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.channel.as_deref().is_some_and(|c| !c.is_empty()) || self.status.is_some()
    }

    /// Query pairs for `page` with only the filters that are set.
    pub fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", page.to_string())];
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(channel) = self.channel.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("channel", channel.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }

    /// Human-readable summary used in exported reports.
    pub fn describe(&self) -> Vec<String> {
        let mut info = Vec::new();
        if let Some(kind) = self.kind {
            info.push(format!("Type: {}", kind.as_str()));
        }
        if let Some(channel) = self.channel.as_deref().filter(|c| !c.is_empty()) {
            info.push(format!("Channel: {channel}"));
        }
        if let Some(status) = self.status {
            info.push(format!("Status: {}", status.as_str()));
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_unset_filters() {
        let filters = TransactionFilters {
            kind: Some(TransactionType::Income),
            channel: Some(String::new()),
            status: None,
        };
        assert_eq!(
            filters.query_pairs(3),
            vec![("page", "3".to_string()), ("type", "INCOME".to_string())]
        );
        assert!(filters.is_active());
        assert!(!TransactionFilters::default().is_active());
    }

    #[test]
    fn page_defaults_when_backend_omits_counters() {
        let page: TransactionPage = serde_json::from_str(r#"{"transactions": []}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.total, 0);
    }
}
