//! Last-standing polling loop.
//!
//! # Responsibilities
//! - Periodically inspect the multiplayer roster
//! - Force the match to end once every remote participant has failed

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::lifecycle::Teardown;
use crate::observability::metrics;
use crate::session::{all_remote_failed, MatchEndHandler, SessionFacade};

/// Poll interval used when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Result of a single monitor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nobody connected, nothing to check.
    Skipped,
    /// At least one remote participant is still playing.
    Continue,
    /// Every remote participant failed and the match was force-ended.
    ForcedEnd,
    /// Every remote participant failed but no match-end handler is available.
    HandlerUnavailable,
}

impl TickOutcome {
    fn as_str(self) -> &'static str {
        match self {
            TickOutcome::Skipped => "skipped",
            TickOutcome::Continue => "continue",
            TickOutcome::ForcedEnd => "forced_end",
            TickOutcome::HandlerUnavailable => "handler_unavailable",
        }
    }
}

/// The running polling task.
#[derive(Debug)]
pub struct MonitorHandle {
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Abort the polling task.
    pub fn stop(self) {
        self.task.abort();
    }
}

struct MonitorInner {
    session: Arc<dyn SessionFacade>,
    match_end: Option<Arc<dyn MatchEndHandler>>,
    interval: Duration,
    active: AtomicBool,
}

/// Forces the match to end when the local player is the last one standing.
pub struct LastStandingMonitor {
    inner: Arc<MonitorInner>,
    handle: Mutex<Option<MonitorHandle>>,
}

impl LastStandingMonitor {
    pub fn new(
        session: Arc<dyn SessionFacade>,
        match_end: Option<Arc<dyn MatchEndHandler>>,
        interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                session,
                match_end,
                interval,
                active: AtomicBool::new(false),
            }),
            handle: Mutex::new(None),
        }
    }

    /// Whether a polling loop is running.
    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::SeqCst)
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Start the polling loop unless one is already running.
    ///
    /// Returns true if this call spawned the loop. Must be called from within a
    /// Tokio runtime.
    pub fn start(&self, teardown: &Teardown) -> bool {
        if !teardown.is_live() {
            return false;
        }
        if self
            .inner
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::trace!("Last-standing monitor already active");
            return false;
        }

        let inner = Arc::clone(&self.inner);
        let shutdown = teardown.subscribe();
        let teardown = teardown.clone();
        let task = tokio::spawn(async move {
            inner.run(teardown, shutdown).await;
        });

        *self.handle.lock().unwrap_or_else(PoisonError::into_inner) = Some(MonitorHandle { task });
        true
    }

    /// Stop the polling loop, if any.
    pub fn stop(&self) {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.stop();
        }
        self.inner.active.store(false, Ordering::SeqCst);
    }

    /// Run one scan outside the loop.
    pub fn check_now(&self) -> TickOutcome {
        self.inner.tick()
    }
}

impl Drop for LastStandingMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

impl MonitorInner {
    async fn run(&self, teardown: Teardown, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs_f64(),
            "Last-standing monitor starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !teardown.is_live() {
                        break;
                    }
                    self.tick();
                }
                _ = shutdown.recv() => {
                    tracing::info!("Last-standing monitor received teardown signal, exiting loop");
                    break;
                }
            }
        }

        self.active.store(false, Ordering::SeqCst);
    }

    fn tick(&self) -> TickOutcome {
        let outcome = self.evaluate();
        metrics::record_monitor_tick(outcome.as_str());
        outcome
    }

    fn evaluate(&self) -> TickOutcome {
        let count = self.session.connected_participant_count();
        if count == 0 {
            tracing::debug!("No connected participants, skipping last standing check");
            return TickOutcome::Skipped;
        }

        let roster = self.session.connected_participants();
        tracing::debug!(count, "Checking if connected participants failed");
        if let Some(local) = roster.iter().find(|p| p.is_local) {
            tracing::trace!(has_failed = local.has_failed, "Local participant state");
        }

        if !all_remote_failed(&roster) {
            return TickOutcome::Continue;
        }

        tracing::debug!("All other participants failed, forcing match end");
        match &self.match_end {
            Some(handler) => {
                handler.force_match_end();
                metrics::record_forced_match_end();
                TickOutcome::ForcedEnd
            }
            None => {
                tracing::warn!("Tried to end the match, but no match-end handler is available");
                TickOutcome::HandlerUnavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{InMemorySession, ParticipantSnapshot};

    fn three_failed_remotes() -> Arc<InMemorySession> {
        Arc::new(InMemorySession::connected(vec![
            ParticipantSnapshot::local("me"),
            ParticipantSnapshot::remote("a").failed(),
            ParticipantSnapshot::remote("b").failed(),
            ParticipantSnapshot::remote("c").failed(),
        ]))
    }

    fn monitor_for(session: &Arc<InMemorySession>) -> LastStandingMonitor {
        LastStandingMonitor::new(session.clone(), Some(session.clone()), DEFAULT_INTERVAL)
    }

    #[tokio::test(start_paused = true)]
    async fn test_forces_end_once_per_tick() {
        let session = three_failed_remotes();
        let monitor = monitor_for(&session);
        let teardown = Teardown::new();

        assert!(monitor.start(&teardown));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(session.forced_end_count(), 1);

        // Keeps polling until torn down.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.forced_end_count(), 2);

        teardown.trigger();
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(session.forced_end_count(), 2);
        assert!(!monitor.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_active_remote_prevents_end() {
        let session = Arc::new(InMemorySession::connected(vec![
            ParticipantSnapshot::local("me").failed(),
            ParticipantSnapshot::remote("a").failed(),
            ParticipantSnapshot::remote("b"),
            ParticipantSnapshot::remote("c").failed(),
        ]));
        let monitor = monitor_for(&session);
        let teardown = Teardown::new();

        monitor.start(&teardown);
        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(session.forced_end_count(), 0);

        session.fail_participant("b");
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.forced_end_count(), 1);
        teardown.trigger();
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_spawns_one_loop() {
        let session = three_failed_remotes();
        let monitor = monitor_for(&session);
        let teardown = Teardown::new();

        assert!(monitor.start(&teardown));
        assert!(!monitor.start(&teardown));
        assert!(monitor.is_active());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(session.forced_end_count(), 1);
        assert_eq!(teardown.receiver_count(), 1);
        teardown.trigger();
    }

    #[tokio::test]
    async fn test_no_participants_skips_scan() {
        let session = Arc::new(InMemorySession::connected(Vec::new()));
        let monitor = monitor_for(&session);

        assert_eq!(monitor.check_now(), TickOutcome::Skipped);
        assert_eq!(session.forced_end_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_handler_is_reported() {
        let session = three_failed_remotes();
        let monitor = LastStandingMonitor::new(session.clone(), None, DEFAULT_INTERVAL);

        assert_eq!(monitor.check_now(), TickOutcome::HandlerUnavailable);
        assert_eq!(session.forced_end_count(), 0);
    }

    #[tokio::test]
    async fn test_start_after_teardown_is_refused() {
        let session = three_failed_remotes();
        let monitor = monitor_for(&session);
        let teardown = Teardown::new();
        teardown.trigger();

        assert!(!monitor.start(&teardown));
        assert!(!monitor.is_active());
    }
}
