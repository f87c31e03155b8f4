use crate::error::{CoreError, CoreResult};
use regex::Regex;

pub const PUBLISHABLE_KEY_ENV: &str = "CLERK_PUBLISHABLE_KEY";

/// Value shipped in page templates before a real key is configured.
pub const PLACEHOLDER_KEY: &str = "pk_test_your_publishable_key_here";

const MASK_PREFIX_CHARS: usize = 20;

#[derive(Clone, PartialEq, Eq)]
pub struct PublishableKey(String);

impl PublishableKey {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let key = raw.trim();
        if key.is_empty() || key == PLACEHOLDER_KEY {
            return Err(CoreError::Config(
                "publishable key is not set or is using the placeholder value".to_string(),
            ));
        }
        let shape = Regex::new(r"^pk_(test|live)_[A-Za-z0-9+/=_$-]+$")
            .map_err(|e| CoreError::InvalidInput(e.to_string()))?;
        if !shape.is_match(key) {
            return Err(CoreError::Config(
                "publishable key must look like pk_test_... or pk_live_...".to_string(),
            ));
        }
        Ok(PublishableKey(key.to_string()))
    }

    pub fn from_env() -> CoreResult<Self> {
        let raw = std::env::var(PUBLISHABLE_KEY_ENV)
            .map_err(|_| CoreError::Config(format!("{} is not set", PUBLISHABLE_KEY_ENV)))?;
        Self::parse(&raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_test(&self) -> bool {
        self.0.starts_with("pk_test_")
    }

    /// First characters only, for logs.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(MASK_PREFIX_CHARS).collect();
        format!("{}...", prefix)
    }
}

// Keep the full key out of `{:?}` output.
impl std::fmt::Debug for PublishableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PublishableKey").field(&self.masked()).finish()
    }
}
