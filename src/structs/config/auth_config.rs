use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Where the access token is kept between runs. Defaults to `~/.arcdesk/token`.
    #[serde(default)]
    pub token_file: Option<String>,

    /// Environment variable that overrides the stored token.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: None,
            token_env: ConfigHelper::default_token_env(),
        }
    }
}
