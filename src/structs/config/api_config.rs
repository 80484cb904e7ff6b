use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Sessions, slots, leads, transactions and user profile.
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Login/registration and the public course catalog live on a second host.
    #[serde(default = "ConfigHelper::default_public_base_url")]
    pub public_base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,

    #[serde(default = "ConfigHelper::default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            public_base_url: ConfigHelper::default_public_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            rate_limit_per_minute: ConfigHelper::default_rate_limit_per_minute(),
            rate_limit_burst: ConfigHelper::default_rate_limit_burst(),
        }
    }
}
