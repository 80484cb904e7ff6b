use serde::{Deserialize, Serialize};
use crate::enums::user_type::UserType;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub addresses: Vec<String>,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,

    #[serde(default)]
    pub message: Option<String>,
}
