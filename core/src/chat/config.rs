use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

fn default_chat_path() -> String {
    "/chat".to_string()
}

fn default_reset_path() -> String {
    "/chat/reset".to_string()
}

fn default_init_message() -> String {
    "init".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatEndpointConfig {
    pub base_url: String,
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
    #[serde(default = "default_reset_path")]
    pub reset_path: String,
    /// Sent by the popup panel to fetch its greeting.
    #[serde(default = "default_init_message")]
    pub init_message: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ChatEndpointConfig {
    pub fn new(base_url: &str) -> Self {
        ChatEndpointConfig {
            base_url: base_url.to_string(),
            chat_path: default_chat_path(),
            reset_path: default_reset_path(),
            init_message: default_init_message(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        let cfg: ChatEndpointConfig = serde_json::from_slice(&bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let base = self.base()?;
        let scheme = base.scheme().to_ascii_lowercase();
        if scheme != "https" && scheme != "http" {
            return Err(CoreError::Config(
                "base_url scheme must be http or https".to_string(),
            ));
        }
        if base.host_str().map(str::is_empty).unwrap_or(true) {
            return Err(CoreError::Config("base_url missing host".to_string()));
        }
        for (field, p) in [("chat_path", &self.chat_path), ("reset_path", &self.reset_path)] {
            if !p.starts_with('/') {
                return Err(CoreError::Config(format!("{} must start with /", field)));
            }
        }
        if self.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "request_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn chat_url(&self) -> CoreResult<Url> {
        self.join(&self.chat_path)
    }

    pub fn reset_url(&self) -> CoreResult<Url> {
        self.join(&self.reset_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn base(&self) -> CoreResult<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| CoreError::Config(format!("invalid base_url: {}", e)))
    }

    fn join(&self, path: &str) -> CoreResult<Url> {
        // Absolute paths replace any path on the base, like a page-relative fetch("/chat").
        self.base()?
            .join(path)
            .map_err(|e| CoreError::Config(format!("invalid path {}: {}", path, e)))
    }
}
