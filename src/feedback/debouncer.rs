//! Fail indicator debouncing.
//!
//! # States
//! - Hidden: indicator not shown, no timer
//! - Visible: indicator shown for the rest of the match (duration <= 0)
//! - VisiblePending: indicator shown, hide timer pending
//!
//! # State Transitions
//! ```text
//! Hidden → VisiblePending: trigger, duration > 0
//! Hidden → Visible: trigger, duration <= 0
//! VisiblePending → Hidden: hide timer fires
//! any → Hidden: forced hide (pending timer cancelled)
//! ```
//!
//! Triggers while visible change nothing. The hide time is fixed when the
//! timer is scheduled and is never pushed back.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::ConfigStore;
use crate::observability::metrics;
use crate::presentation::FailIndicator;

/// Visibility of the fail indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    Hidden,
    Visible,
    VisiblePending,
}

impl EffectPhase {
    pub fn is_visible(self) -> bool {
        self != EffectPhase::Hidden
    }
}

/// What a call to [`EffectDebouncer::trigger`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Indicator shown; hides after the given delay, or never.
    Shown { hide_after: Option<Duration> },
    /// Indicator was already visible; timer left untouched.
    AlreadyVisible,
    /// Repeat effects are off and this is not the first failure.
    Suppressed,
    /// The fail effect is switched off in the config.
    Disabled,
    /// No indicator was injected for this match.
    Unavailable,
    /// The indicator refused to show; state stays Hidden.
    Failed,
}

struct DebounceState {
    phase: EffectPhase,
    timer: Option<JoinHandle<()>>,
    /// Bumped whenever a timer is scheduled or cancelled. A timer only acts if
    /// its generation is still current when it wakes.
    generation: u64,
}

impl DebounceState {
    fn cancel_timer(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Shows the fail indicator and hides it again after the configured duration.
///
/// State and timer live behind one mutex so cancelling and scheduling a timer
/// is a single step.
pub struct EffectDebouncer {
    indicator: Option<Arc<dyn FailIndicator>>,
    config: ConfigStore,
    state: Arc<Mutex<DebounceState>>,
}

impl EffectDebouncer {
    pub fn new(indicator: Option<Arc<dyn FailIndicator>>, config: ConfigStore) -> Self {
        Self {
            indicator,
            config,
            state: Arc::new(Mutex::new(DebounceState {
                phase: EffectPhase::Hidden,
                timer: None,
                generation: 0,
            })),
        }
    }

    pub fn phase(&self) -> EffectPhase {
        lock(&self.state).phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase().is_visible()
    }

    /// Show the indicator for failure number `fail_count`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn trigger(&self, fail_count: u32) -> TriggerOutcome {
        let config = self.config.current();

        if !config.repeat_fail_effect && fail_count > 1 {
            tracing::debug!(fail_count, "Repeat fail effect disabled, not showing indicator");
            return TriggerOutcome::Suppressed;
        }
        if !config.show_fail_effect {
            return TriggerOutcome::Disabled;
        }
        let Some(indicator) = &self.indicator else {
            tracing::warn!("Fail indicator unavailable, skipping fail effect");
            return TriggerOutcome::Unavailable;
        };

        let mut state = lock(&self.state);
        if state.phase.is_visible() {
            tracing::trace!(phase = ?state.phase, "Fail indicator already visible");
            return TriggerOutcome::AlreadyVisible;
        }

        if let Err(e) = indicator.show() {
            tracing::error!(error = %e, "Exception trying to show the fail effect");
            return TriggerOutcome::Failed;
        }

        let hide_after = config.fail_effect_duration();
        match hide_after {
            Some(after) => {
                state.cancel_timer();
                let generation = state.generation;
                state.timer = Some(self.spawn_hide(Arc::clone(indicator), after, generation));
                state.phase = EffectPhase::VisiblePending;
                tracing::debug!(hide_after_secs = after.as_secs_f64(), "Fail indicator shown");
            }
            None => {
                state.phase = EffectPhase::Visible;
                tracing::debug!("Fail indicator shown, never hides");
            }
        }
        metrics::record_effect_visible(true);

        TriggerOutcome::Shown { hide_after }
    }

    /// Hide the indicator now and cancel any pending hide timer.
    pub fn hide(&self) {
        let mut state = lock(&self.state);
        state.cancel_timer();

        let was_visible = state.phase.is_visible();
        state.phase = EffectPhase::Hidden;
        if !was_visible {
            return;
        }

        if let Some(indicator) = &self.indicator {
            if let Err(e) = indicator.hide() {
                tracing::error!(error = %e, "Exception trying to hide the fail effect");
            }
        }
        metrics::record_effect_visible(false);
        tracing::debug!("Fail indicator hidden (forced)");
    }

    /// Cancel any pending hide timer without touching the indicator.
    pub fn cancel(&self) {
        let mut state = lock(&self.state);
        state.cancel_timer();
        state.phase = EffectPhase::Hidden;
    }

    fn spawn_hide(
        &self,
        indicator: Arc<dyn FailIndicator>,
        after: Duration,
        generation: u64,
    ) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            tokio::time::sleep(after).await;

            let mut state = lock(&state);
            if state.generation != generation {
                tracing::trace!("Stale hide timer woke up, ignoring");
                return;
            }
            state.timer = None;
            state.phase = EffectPhase::Hidden;

            if let Err(e) = indicator.hide() {
                tracing::error!(error = %e, "Exception trying to hide the fail effect");
            }
            metrics::record_effect_visible(false);
            tracing::debug!("Fail indicator hidden");
        })
    }
}

impl Drop for EffectDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn lock(state: &Mutex<DebounceState>) -> MutexGuard<'_, DebounceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
