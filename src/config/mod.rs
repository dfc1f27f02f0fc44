//! Client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Connectivity check consulted when a request fails with no response.
pub type OfflineProbe = Arc<dyn Fn() -> bool + Send + Sync>;

/// Predicate deciding whether a transport error is a client-side timeout.
pub type TimeoutMatcher = Arc<dyn Fn(&reqwest::Error) -> bool + Send + Sync>;

/// Hook fired once per failed refresh cycle, after the session is cleared.
pub type ForcedLogoutHook = Arc<dyn Fn() + Send + Sync>;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::client::ApiClient`].
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tradetracker_client::config::ClientConfig;
///
/// let config = ClientConfig::new("https://api.tradetracker.example")
///     .with_timeout(Duration::from_secs(10))
///     .with_forced_logout(|| eprintln!("logged out"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    pub(crate) offline_probe: OfflineProbe,
    pub(crate) timeout_matcher: TimeoutMatcher,
    pub(crate) on_forced_logout: Option<ForcedLogoutHook>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            offline_probe: Arc::new(|| false),
            timeout_matcher: Arc::new(|error| error.is_timeout()),
            on_forced_logout: None,
        }
    }

    /// Per-request deadline applied to the underlying HTTP client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the connectivity check (the browser-world `navigator.onLine`
    /// equivalent). Default: never offline.
    pub fn with_offline_probe(mut self, probe: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.offline_probe = Arc::new(probe);
        self
    }

    /// Replace the timeout predicate. Default: [`reqwest::Error::is_timeout`].
    pub fn with_timeout_matcher(
        mut self,
        matcher: impl Fn(&reqwest::Error) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.timeout_matcher = Arc::new(matcher);
        self
    }

    /// Install a hook invoked when a failed refresh forces a logout, so a UI
    /// can navigate to its login entry point.
    pub fn with_forced_logout(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_forced_logout = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("on_forced_logout", &self.on_forced_logout.is_some())
            .finish_non_exhaustive()
    }
}
