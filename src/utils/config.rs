//! Configuration and constants for the agent.

use std::time::Duration;

/// Current profile document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of report entries shown when no usable limit is given
pub const DEFAULT_LIMIT: usize = 100;

// Range enforced on `limit` by the per-kind tools
pub const MIN_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 10_000;

/// Default CPU sampling window, in seconds
pub const DEFAULT_CPU_DURATION_SECS: u64 = 10;

// Range enforced on `duration` at the tool boundary
pub const MIN_CPU_DURATION_SECS: u64 = 1;
pub const MAX_CPU_DURATION_SECS: u64 = 60;

/// Timeout for HTTP profile requests, on top of any CPU sampling window
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Name and version reported by the tool registry
pub const SERVER_NAME: &str = "pprof server";
pub const SERVER_VERSION: &str = "1.0.0";

/// Default CPU sampling window as a `Duration`
pub fn default_cpu_duration() -> Duration {
    Duration::from_secs(DEFAULT_CPU_DURATION_SECS)
}
