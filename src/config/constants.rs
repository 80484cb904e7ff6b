use std::time::Duration;

pub const APP_DIR_NAME: &str = ".arcdesk";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const TOKEN_FILE_NAME: &str = "token";

pub const DEFAULT_API_BASE_URL: &str = "https://api.arcdatum.com/api";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://api.arcdatumcode.info/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 120;
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 10;
pub const RATE_LIMIT_JITTER_MS: u64 = 50;

pub const TOKEN_ENV: &str = "ARCDESK_TOKEN";
pub const DEFAULT_EXPORT_DIR: &str = "./arcdesk-exports";

pub const MISSING_TOKEN_MESSAGE: &str = "No authentication token found. Please log in.";
pub const SELECT_SLOT_MESSAGE: &str = "Please select a new slot";
pub const MEETING_LINK_UNAVAILABLE: &str = "Meeting link not available";

pub const SPINNER_FRAME_MS: u64 = 150;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
