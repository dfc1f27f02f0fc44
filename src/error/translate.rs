//! Error-code to user-message translation.
//!
//! Messages are keyed `apiErrors.<CODE>`. Lookup is total: an unknown code
//! resolves to the catalog's fallback string, never to the raw key.

use std::collections::HashMap;

use super::ApiError;

/// Key of the generic fallback message.
pub const FALLBACK_KEY: &str = "apiErrors.unexpected";

const DEFAULT_FALLBACK: &str = "Something went wrong. Please try again.";

/// Built-in English messages for the client-side taxonomy and the backend
/// codes the UI is known to surface.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (
        "apiErrors.NETWORK_ERROR",
        "You appear to be offline. Check your connection and try again.",
    ),
    (
        "apiErrors.TIMEOUT_ERROR",
        "The request timed out. Please try again.",
    ),
    (
        "apiErrors.SERVER_UNAVAILABLE",
        "The server is unavailable right now. Please try again later.",
    ),
    (
        "apiErrors.INTERNAL_SERVER_ERROR",
        "The server ran into an unexpected problem.",
    ),
    (
        "apiErrors.USER_WITH_GIVEN_EMAIL_ALREADY_EXISTS",
        "An account with this email already exists.",
    ),
    (
        "apiErrors.CATEGORY_ALREADY_EXISTS",
        "A category with this name already exists.",
    ),
];

/// Catalog of user-facing error messages.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
    fallback: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(key, message)| (key.to_string(), message.to_string()))
            .collect();
        Self {
            messages,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl MessageCatalog {
    /// Catalog pre-seeded with the built-in English messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with no entries besides the given fallback.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            messages: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Load a catalog from a flat JSON object of `"apiErrors.<CODE>": "text"`
    /// entries, layered over the built-in defaults. An `apiErrors.unexpected`
    /// entry replaces the fallback.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let overrides: HashMap<String, String> = serde_json::from_str(raw)?;
        let mut catalog = Self::default();
        for (key, message) in overrides {
            catalog.insert(key, message);
        }
        Ok(catalog)
    }

    /// Insert or replace a single message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        if key == FALLBACK_KEY {
            self.fallback = message;
        } else {
            self.messages.insert(key, message);
        }
    }

    /// Resolve the user-facing message for an error. Never fails.
    pub fn translate(&self, error: &ApiError) -> &str {
        let key = format!("apiErrors.{}", error.code.as_str());
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
