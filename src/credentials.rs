//! Account credentials captured at connect time.
//!
//! Held in memory for the life of a session and dropped on disconnect.
//! Nothing here is persisted or sent anywhere.

use anyhow::{Result, bail};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub bearer_token: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            bearer_token: bearer_token.into(),
        }
    }

    /// Every field is required.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("API key", &self.api_key),
            ("API secret", &self.api_secret),
            ("bearer token", &self.bearer_token),
        ] {
            if value.trim().is_empty() {
                bail!("{name} is required");
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &mask(&self.api_secret))
            .field("bearer_token", &mask(&self.bearer_token))
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "[REDACTED]" }
}

/// Normalize an account handle: trim, strip one leading `@`, reject empties.
pub fn normalize_handle(raw: &str) -> Result<String> {
    let handle = raw.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle).trim();
    if handle.is_empty() {
        bail!("handle is required");
    }
    Ok(handle.to_string())
}
