//! Shared application state for request handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::host::{HostnameSource, SystemHostname};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, the hostname source used by the
/// greeting handler, and process-wide request counters.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub host: Arc<dyn HostnameSource>,
    pub stats: Arc<ServerStats>,
}

impl AppState {
    /// Creates application state that reads the hostname from the OS.
    pub fn new(config: AppConfig) -> Self {
        Self::with_hostname_source(config, SystemHostname)
    }

    /// Creates application state with a custom hostname source.
    pub fn with_hostname_source(config: AppConfig, host: impl HostnameSource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            host: Arc::new(host),
            stats: Arc::new(ServerStats::new()),
        }
    }
}

/// Request counters and start time, reported by `GET /status`.
#[derive(Debug)]
pub struct ServerStats {
    started_at: DateTime<Utc>,
    started: Instant,
    requests_processed: AtomicU64,
    active_requests: AtomicU64,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
            requests_processed: AtomicU64::new(0),
            active_requests: AtomicU64::new(0),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn requests_processed(&self) -> u64 {
        self.requests_processed.load(Ordering::Relaxed)
    }

    pub fn active_requests(&self) -> u64 {
        self.active_requests.load(Ordering::Relaxed)
    }

    /// Mark a request as in flight. The returned guard records completion
    /// when dropped, so cancelled requests are still accounted for.
    pub fn begin_request(self: &Arc<Self>) -> RequestGuard {
        self.active_requests.fetch_add(1, Ordering::Relaxed);
        RequestGuard {
            stats: Arc::clone(self),
        }
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrements the in-flight count and bumps the processed count on drop.
#[derive(Debug)]
pub struct RequestGuard {
    stats: Arc<ServerStats>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.stats.active_requests.fetch_sub(1, Ordering::Relaxed);
        self.stats.requests_processed.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_guard_updates_counters() {
        let stats = Arc::new(ServerStats::new());
        assert_eq!(stats.active_requests(), 0);
        assert_eq!(stats.requests_processed(), 0);

        let first = stats.begin_request();
        let second = stats.begin_request();
        assert_eq!(stats.active_requests(), 2);
        assert_eq!(stats.requests_processed(), 0);

        drop(first);
        assert_eq!(stats.active_requests(), 1);
        assert_eq!(stats.requests_processed(), 1);

        drop(second);
        assert_eq!(stats.active_requests(), 0);
        assert_eq!(stats.requests_processed(), 2);
    }

    #[test]
    fn test_started_at_is_not_in_the_future() {
        let stats = ServerStats::new();
        assert!(stats.started_at() <= Utc::now());
    }
}
