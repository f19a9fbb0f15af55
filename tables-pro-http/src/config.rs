use std::time::Duration;

/// Settings for [`HttpRemote`](crate::HttpRemote).
#[derive(Debug, Clone, Default)]
pub struct HttpRemoteConfig {
    /// Base for relative request URLs when the page has no location.
    pub base_url: Option<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpRemoteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
