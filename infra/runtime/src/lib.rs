//! # Runtime
//!
//! Tokio runtime profiles shared by the workspace binaries.
//!
//! ## Profiles
//! * **Server**: every detected core, roomier stacks and a long keep-alive for the HTTP server.
//! * **Lean**: half the cores and small stacks for short-lived tools like the static exporter.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[ocean_runtime::main(server)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use ocean_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Worker threads used when parallelism cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
/// 2 `MiB`, enough for deep component trees during rendering.
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);
const DEFAULT_THREAD_NAME: &str = "ocean-worker";

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// `TOKIO_WORKER_THREADS` when it holds a sane value, otherwise the available parallelism.
fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        parse_worker_threads(std::env::var("TOKIO_WORKER_THREADS").ok().as_deref()).unwrap_or_else(
            || available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS),
        )
    })
}

fn parse_worker_threads(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|&n| n > 0 && n <= MAX_WORKER_THREADS)
}

fn thread_name_or_default(name: String) -> String {
    if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name }
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// Preset for the long-running HTTP server.
    #[must_use]
    pub fn server() -> Self {
        Self {
            worker_threads: detected_worker_threads(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "ocean-server".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    /// Preset for one-shot command line tools.
    #[must_use]
    pub fn lean() -> Self {
        Self {
            worker_threads: (detected_worker_threads() / 2).max(1),
            stack_size: MIN_STACK_SIZE * 2,
            thread_name: "ocean-lean".to_owned(),
            thread_keep_alive: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = thread_name_or_default(name.into());
        self
    }

    #[must_use]
    pub const fn with_thread_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.thread_keep_alive = keep_alive;
        self
    }

    /// Re-applies every clamp, for configs assembled by hand.
    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// # Errors
///
/// Returns an error when the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(
        threads = config.worker_threads,
        stack = config.stack_size,
        name = %config.thread_name,
        "Building tokio runtime"
    );

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_threads_are_clamped() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
        assert_eq!(RuntimeConfig::default().with_worker_threads(5000).worker_threads, 1024);
    }

    #[test]
    fn test_stack_size_is_clamped() {
        assert_eq!(RuntimeConfig::default().with_stack_size(100).stack_size, MIN_STACK_SIZE);
        assert_eq!(
            RuntimeConfig::default().with_stack_size(100 * 1024 * 1024).stack_size,
            MAX_STACK_SIZE
        );
    }

    #[test]
    fn test_blank_thread_name_falls_back() {
        assert_eq!(RuntimeConfig::default().with_thread_name("  ").thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn test_worker_threads_env_parsing() {
        assert_eq!(parse_worker_threads(Some("8")), Some(8));
        assert_eq!(parse_worker_threads(Some(" 3 ")), Some(3));
        assert_eq!(parse_worker_threads(Some("0")), None);
        assert_eq!(parse_worker_threads(Some("2048")), None);
        assert_eq!(parse_worker_threads(Some("many")), None);
        assert_eq!(parse_worker_threads(None), None);
    }

    #[test]
    fn test_lean_uses_fewer_threads_than_server() {
        let server = RuntimeConfig::server();
        let lean = RuntimeConfig::lean();
        assert!(lean.worker_threads >= 1);
        assert!(lean.worker_threads <= server.worker_threads);
        assert!(lean.stack_size < server.stack_size);
    }

    #[test]
    fn test_normalized_repairs_hand_built_config() {
        let config = RuntimeConfig {
            worker_threads: 0,
            stack_size: 1,
            thread_name: String::new(),
            thread_keep_alive: Duration::from_secs(1),
        }
        .normalized();

        assert_eq!(config.worker_threads, 1);
        assert_eq!(config.stack_size, MIN_STACK_SIZE);
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn test_runtime_runs_a_future() {
        let rt = build_runtime_with_config(&RuntimeConfig::lean().with_worker_threads(1))
            .expect("runtime");
        assert_eq!(rt.block_on(async { 40 + 2 }), 42);
    }
}
