//! One-shot readiness notification to whatever hosts the reader.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::{info, warn};

/// The host side of the readiness contract.
pub trait HostBridge: Send + Sync {
    fn ready(&self) -> Result<()>;
}

/// Host that only records readiness in the log.
#[derive(Debug, Default)]
pub struct LogHost;

impl HostBridge for LogHost {
    fn ready(&self) -> Result<()> {
        info!("Content is renderable");
        Ok(())
    }
}

/// Host that writes a marker file for a supervising process to watch.
#[derive(Debug)]
pub struct MarkerFileHost {
    path: PathBuf,
}

impl MarkerFileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HostBridge for MarkerFileHost {
    fn ready(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let stamp = chrono::Utc::now().to_rfc3339();
        std::fs::write(&self.path, format!("ready {}\n", stamp))
            .with_context(|| format!("Failed to write ready file: {:?}", self.path))?;
        info!("Wrote ready marker to {:?}", self.path);
        Ok(())
    }
}

/// Fires the host's `ready()` at most once per process.
///
/// Host failures are logged and swallowed.
pub struct ReadySignal {
    once: Once,
    fired: AtomicBool,
    host: Box<dyn HostBridge>,
}

impl ReadySignal {
    pub fn new(host: Box<dyn HostBridge>) -> Self {
        Self {
            once: Once::new(),
            fired: AtomicBool::new(false),
            host,
        }
    }

    pub fn fire(&self) {
        self.once.call_once(|| {
            if let Err(err) = self.host.ready() {
                warn!("Host readiness notification failed: {:#}", err);
            }
            self.fired.store(true, Ordering::Release);
        });
    }

    /// True once `fire` has run, whether or not the host call succeeded.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadySignal")
            .field("fired", &self.has_fired())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct Counter(Arc<AtomicUsize>);

    impl HostBridge for Counter {
        fn ready(&self) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Broken;

    impl HostBridge for Broken {
        fn ready(&self) -> Result<()> {
            anyhow::bail!("host went away")
        }
    }

    #[test]
    fn test_fires_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signal = ReadySignal::new(Box::new(Counter(calls.clone())));
        assert!(!signal.has_fired());
        for _ in 0..10 {
            signal.fire();
        }
        assert!(signal.has_fired());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fires_once_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signal = Arc::new(ReadySignal::new(Box::new(Counter(calls.clone()))));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let signal = signal.clone();
                std::thread::spawn(move || signal.fire())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_host_failure_is_swallowed() {
        let signal = ReadySignal::new(Box::new(Broken));
        signal.fire();
        assert!(signal.has_fired());
    }

    #[test]
    fn test_marker_file_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run").join("ready");
        let signal = ReadySignal::new(Box::new(MarkerFileHost::new(&path)));
        signal.fire();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ready "));
    }
}
