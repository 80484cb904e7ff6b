use std::fs;
use std::path::PathBuf;
use tokio::sync::watch;
use crate::errors::{ArcdeskError, ArcdeskResult};

/// Single owner of the access token. Commands read the token through here and the
/// API client follows it through [`AuthContext::subscribe`], so nothing else touches
/// the token file.
pub struct AuthContext {
    token_path: Option<PathBuf>,
    sender: watch::Sender<Option<String>>,
}

impl AuthContext {
    /// Token from `env_var` when set, otherwise from `token_path` if it exists.
    pub fn load(token_path: PathBuf, env_var: &str) -> ArcdeskResult<Self> {
        let from_env = std::env::var(env_var).ok().filter(|t| !t.trim().is_empty());

        let token = match from_env {
            Some(token) => {
                log::debug!("Using access token from ${}", env_var);
                Some(token.trim().to_string())
            }
            None if token_path.exists() => {
                let raw = fs::read_to_string(&token_path)
                    .map_err(|e| ArcdeskError::file_error(&token_path.display().to_string(), "read token", &e.to_string()))?;
                Some(raw.trim().to_string()).filter(|t| !t.is_empty())
            }
            None => None,
        };

        Ok(Self::with_token(Some(token_path), token))
    }

    /// Context that never touches the filesystem.
    pub fn in_memory(token: Option<String>) -> Self {
        Self::with_token(None, token)
    }

    fn with_token(token_path: Option<PathBuf>, token: Option<String>) -> Self {
        let (sender, _) = watch::channel(token);
        Self { token_path, sender }
    }

    /// Current token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Notified whenever the token is stored or cleared.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.sender.subscribe()
    }

    /// Persists `token` and notifies subscribers.
    pub fn set_token(&self, token: &str) -> ArcdeskResult<()> {
        if let Some(path) = &self.token_path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, token)
                .map_err(|e| ArcdeskError::file_error(&path.display().to_string(), "write token", &e.to_string()))?;
        }
        self.sender.send_replace(Some(token.to_string()));
        Ok(())
    }

    /// Removes the stored token and notifies subscribers.
    pub fn clear(&self) -> ArcdeskResult<()> {
        if let Some(path) = &self.token_path {
            if path.exists() {
                fs::remove_file(path)
                    .map_err(|e| ArcdeskError::file_error(&path.display().to_string(), "remove token", &e.to_string()))?;
            }
        }
        self.sender.send_replace(None);
        Ok(())
    }
}
