// ── Runtime configuration for a Console session ──
//
// Built by the CLI/TUI (usually via klima-config) and handed in;
// core never reads config files itself.

use std::time::Duration;

use url::Url;

/// Fallback API base URL when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:7063";

/// Configuration for a [`Console`](crate::Console) session.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the fleet API.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL
                .parse()
                .expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
        }
    }
}
