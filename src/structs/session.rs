use serde::{Deserialize, Serialize};
use crate::enums::session_status::SessionStatus;
use crate::traits::searchable::Searchable;

/// A confirmed booking against a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub session_code: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub date: String,

    /// Range such as `"09:00-10:00"`.
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub runtime: Option<u32>,

    #[serde(default)]
    pub status: SessionStatus,

    #[serde(default)]
    pub joining_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_code: Option<String>,
}

impl Session {
    /// Start of the `time` range, e.g. `"09:00"` for `"09:00-10:00"`.
    pub fn start_time(&self) -> Option<&str> {
        self.time
            .split('-')
            .next()
            .map(str::trim)
            .filter(|start| !start.is_empty())
    }

    pub fn runtime_label(&self) -> String {
        self.runtime.map_or_else(|| "N/A".to_string(), |minutes| format!("{minutes} min"))
    }
}

impl Searchable for Session {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.session_code.as_str()),
            Some(self.email.as_str()),
            self.slot_code.as_deref(),
            Some(self.status.as_str()),
        ]
    }
}
