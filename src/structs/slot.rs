use serde::{Deserialize, Serialize};

/// A bookable window published by the scheduling backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub slot_code: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub runtime: Option<u32>,

    #[serde(default)]
    pub status: Option<String>,
}

impl Slot {
    pub fn is_free(&self) -> bool {
        self.status.as_deref() == Some("Free")
    }
}
