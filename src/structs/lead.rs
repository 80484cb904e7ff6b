use serde::{Deserialize, Serialize};
use crate::enums::lead_status::LeadStatus;
use crate::traits::searchable::Searchable;

/// Inbound contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub status: Option<LeadStatus>,

    #[serde(default)]
    pub additional_message: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.full_name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.status.filter(|s| *s != LeadStatus::Unknown).map(LeadStatus::as_str),
            self.additional_message.as_deref(),
        ]
    }
}
