use serde::{Deserialize, Serialize};
use crate::enums::user_type::UserType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    pub email: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub user_type: Option<UserType>,
}
