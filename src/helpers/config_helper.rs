use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_PUBLIC_BASE_URL, DEFAULT_EXPORT_DIR, DEFAULT_RATE_LIMIT_BURST,
    DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_REQUEST_TIMEOUT_SECS, TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_public_base_url() -> String {
        DEFAULT_PUBLIC_BASE_URL.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub const fn default_rate_limit_per_minute() -> u32 {
        DEFAULT_RATE_LIMIT_PER_MINUTE
    }

    pub const fn default_rate_limit_burst() -> u32 {
        DEFAULT_RATE_LIMIT_BURST
    }

    pub fn default_token_env() -> String {
        TOKEN_ENV.to_string()
    }

    pub fn default_export_dir() -> String {
        DEFAULT_EXPORT_DIR.to_string()
    }

    pub const fn default_open_exports() -> bool {
        true
    }

    pub const fn default_verbose() -> bool {
        false
    }
}
