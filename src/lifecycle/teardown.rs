//! Match teardown coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Coordinator for match teardown.
///
/// Long-running match tasks subscribe to the broadcast channel to wake up
/// promptly, and check [`Teardown::is_live`] after every resume so a task that
/// was already past its wait never acts on a destroyed match.
#[derive(Clone)]
pub struct Teardown {
    tx: broadcast::Sender<()>,
    live: Arc<AtomicBool>,
}

impl Teardown {
    /// Create a new teardown coordinator for a live match.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Subscribe to the teardown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Tear the match down. Only the first call has any effect.
    pub fn trigger(&self) -> bool {
        if self.live.swap(false, Ordering::SeqCst) {
            let _ = self.tx.send(());
            true
        } else {
            false
        }
    }

    /// Whether the match is still running.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    /// Number of tasks still subscribed.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}
