use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, TOKEN_FILE_NAME};
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn app_dir() -> PathBuf {
        dirs::home_dir().map(|d| d.join(APP_DIR_NAME)).unwrap_or_default()
    }

    pub fn config_path() -> PathBuf {
        Self::app_dir().join(CONFIG_FILE_NAME)
    }

    pub fn token_path(config: &Config) -> PathBuf {
        config
            .auth
            .token_file
            .as_ref()
            .map_or_else(|| Self::app_dir().join(TOKEN_FILE_NAME), PathBuf::from)
    }

    pub fn load() -> ArcdeskResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Falls back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> ArcdeskResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ArcdeskError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> ArcdeskResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> ArcdeskResult<()> {
        let sample_config = r#"# arcdesk configuration

[api]
# Sessions, slots, leads, transactions and the signed-in profile
base_url = "https://api.arcdatum.com/api"

# Login, registration and the public course catalog
public_base_url = "https://api.arcdatumcode.info/api"

# Per-request timeout
timeout_secs = 30

# Client-side throttle for outgoing requests
rate_limit_per_minute = 120
rate_limit_burst = 10

[auth]
# Where 'arcdesk login' keeps the access token (default: ~/.arcdesk/token)
# token_file = "/home/user/.arcdesk/token"

# Environment variable that overrides the stored token
token_env = "ARCDESK_TOKEN"

[output]
# Directory for exported HTML reports
export_dir = "./arcdesk-exports"

# Open exported reports in the browser so they can be printed
open_exports = true

verbose = false
"#;
        if path.exists() {
            return Err(ArcdeskError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ArcdeskError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(path, sample_config)
            .map_err(|e| ArcdeskError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (field, value) in [("api.base_url", &config.api.base_url), ("api.public_base_url", &config.api.public_base_url)] {
            match Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!("{field} must be http(s), got scheme '{}'", url.scheme())),
                Err(e) => errors.push(format!("{field} is not a valid URL ({value}): {e}")),
            }
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.api.rate_limit_per_minute == 0 || config.api.rate_limit_burst == 0 {
            errors.push("api.rate_limit_per_minute and api.rate_limit_burst must be greater than zero".to_string());
        }

        if config.auth.token_env.trim().is_empty() {
            errors.push("auth.token_env must not be empty".to_string());
        }

        if config.output.export_dir.trim().is_empty() {
            errors.push("output.export_dir must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
