//! Failure orchestration.
//!
//! # Responsibilities
//! - Count bail-outs for the match
//! - Start last-standing detection on the first failure in a connected session
//! - Drive counter text, fail indicator, and fail animation
//! - Cancel all match tasks on teardown

use std::sync::Arc;

use uuid::Uuid;

use crate::controller::context::{Collaborators, MatchContext};
use crate::controller::state::FailureState;
use crate::error::FeedbackError;
use crate::feedback::{AnimationGate, EffectDebouncer, TriggerOutcome};
use crate::monitor::LastStandingMonitor;
use crate::observability::metrics;
use crate::presentation::text::update_counter;
use crate::presentation::CounterText;
use crate::session::SessionFacade;

/// What happened for one local failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureReport {
    pub fail_count: u32,
    /// This failure spawned the last-standing monitor.
    pub monitor_started: bool,
    pub counter_updated: bool,
    pub indicator: TriggerOutcome,
    pub animation_played: bool,
}

/// Result of [`FailureOrchestrator::on_level_failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Bail-out mode does not apply to this match right now.
    Inactive,
    Handled(FailureReport),
}

/// Composition root for bail-out handling in one match.
pub struct FailureOrchestrator {
    context: MatchContext,
    fail_count: u32,
    session: Option<Arc<dyn SessionFacade>>,
    monitor: Option<LastStandingMonitor>,
    debouncer: EffectDebouncer,
    animation: AnimationGate,
    counter: Option<Arc<dyn CounterText>>,
}

impl FailureOrchestrator {
    pub fn new(context: MatchContext, collaborators: Collaborators) -> Self {
        let Collaborators {
            session,
            match_end,
            indicator,
            animation,
            counter,
        } = collaborators;

        let interval = context.config.current().last_standing_interval();
        let monitor = session
            .as_ref()
            .map(|s| LastStandingMonitor::new(Arc::clone(s), match_end, interval));
        let debouncer = EffectDebouncer::new(indicator, context.config.clone());

        Self {
            context,
            fail_count: 0,
            session,
            monitor,
            debouncer,
            animation: AnimationGate::new(animation),
            counter,
        }
    }

    pub fn match_id(&self) -> Uuid {
        self.context.match_id
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    /// Log collaborator availability at match start.
    pub fn start(&self) {
        let _span = tracing::info_span!("bail_out", match_id = %self.context.match_id).entered();
        tracing::debug!("Bail-out controller starting");

        if self.is_enabled() {
            tracing::info!(mode = ?self.context.gameplay.mode, "Bail-out mode enabled");
        }
        if self.session.is_none() {
            tracing::warn!("Multiplayer session is unavailable");
        }
        if !self.animation.is_available() {
            tracing::warn!("Couldn't find the fail animation");
        }
        if self.counter.is_none() {
            tracing::warn!("Counter text is unavailable");
        }
    }

    /// Whether bail-out handling applies right now. Evaluated on every call.
    pub fn is_enabled(&self) -> bool {
        let config = self.context.config.current();
        self.context.gameplay.allows_bail_out(&config)
    }

    pub fn fail_count(&self) -> u32 {
        self.fail_count
    }

    pub fn state(&self) -> FailureState {
        FailureState {
            fail_count: self.fail_count,
            visible: self.debouncer.is_visible(),
        }
    }

    pub fn monitor_active(&self) -> bool {
        self.monitor.as_ref().is_some_and(LastStandingMonitor::is_active)
    }

    /// Handle a local "level failed" event.
    ///
    /// Must be called from within a Tokio runtime. Never fails: presentation
    /// problems are logged and reported in the returned outcome.
    pub fn on_level_failed(&mut self) -> FailureOutcome {
        let _span = tracing::info_span!("bail_out", match_id = %self.context.match_id).entered();

        if !self.context.teardown.is_live() {
            tracing::debug!("Level failed after teardown, ignoring");
            return FailureOutcome::Inactive;
        }
        let config = self.context.config.current();
        if !self.context.gameplay.allows_bail_out(&config) {
            return FailureOutcome::Inactive;
        }

        self.fail_count = self.fail_count.saturating_add(1);
        let fail_count = self.fail_count;
        metrics::record_fail(fail_count);
        tracing::info!(fail_count, "Bailed out");

        let monitor_started = self.start_monitor();

        let counter_updated = match &self.counter {
            Some(text) => match update_counter(text.as_ref(), &config, fail_count) {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to update counter text");
                    false
                }
            },
            None => {
                tracing::warn!("Counter text unavailable, skipping update");
                false
            }
        };

        let indicator = self.debouncer.trigger(fail_count);

        // A suppressed repeat skips the animation too.
        let animation_played = indicator != TriggerOutcome::Suppressed
            && config.show_fail_animation
            && match self.animation.play() {
                Ok(()) => true,
                Err(FeedbackError::Unavailable(what)) => {
                    tracing::warn!("{} is unavailable, skipping", what);
                    false
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to play the fail animation");
                    false
                }
            };

        FailureOutcome::Handled(FailureReport {
            fail_count,
            monitor_started,
            counter_updated,
            indicator,
            animation_played,
        })
    }

    /// Hide the fail indicator now.
    pub fn hide_fail_effect(&self) {
        self.debouncer.hide();
    }

    /// Stop every match task. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.context.teardown.trigger() {
            tracing::debug!(match_id = %self.context.match_id, "Tearing down bail-out controller");
        }
        if let Some(monitor) = &self.monitor {
            monitor.stop();
        }
        self.debouncer.cancel();
    }

    fn start_monitor(&self) -> bool {
        let (Some(session), Some(monitor)) = (&self.session, &self.monitor) else {
            return false;
        };
        if !session.is_connected() {
            return false;
        }

        let started = monitor.start(&self.context.teardown);
        if started {
            tracing::info!(
                interval_secs = monitor.interval().as_secs_f64(),
                "Started last-standing check"
            );
        }
        started
    }
}

impl Drop for FailureOrchestrator {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BailOutConfig, ConfigStore};
    use crate::controller::gate::{GameMode, GameplaySetup};

    fn orchestrator(config: BailOutConfig, gameplay: GameplaySetup) -> FailureOrchestrator {
        let context = MatchContext::new(ConfigStore::new(config), gameplay);
        FailureOrchestrator::new(context, Collaborators::default())
    }

    #[tokio::test]
    async fn test_counts_without_collaborators() {
        let mut orch = orchestrator(BailOutConfig::default(), GameplaySetup::multiplayer());

        for expected in 1..=3 {
            match orch.on_level_failed() {
                FailureOutcome::Handled(report) => {
                    assert_eq!(report.fail_count, expected);
                    assert!(!report.counter_updated);
                    assert_eq!(report.indicator, TriggerOutcome::Unavailable);
                    assert!(!report.animation_played);
                    assert!(!report.monitor_started);
                }
                FailureOutcome::Inactive => panic!("should be enabled"),
            }
        }
        assert_eq!(orch.state(), FailureState { fail_count: 3, visible: false });
    }

    #[tokio::test]
    async fn test_mission_mode_is_inactive() {
        let mut orch = orchestrator(
            BailOutConfig::default(),
            GameplaySetup {
                mode: GameMode::Mission,
                ..Default::default()
            },
        );
        assert!(!orch.is_enabled());
        assert_eq!(orch.on_level_failed(), FailureOutcome::Inactive);
        assert_eq!(orch.fail_count(), 0);
    }

    #[tokio::test]
    async fn test_gate_is_read_fresh() {
        let mut orch = orchestrator(BailOutConfig::default(), GameplaySetup::multiplayer());
        orch.on_level_failed();

        orch.context().config.update(|c| c.is_enabled = false);
        assert_eq!(orch.on_level_failed(), FailureOutcome::Inactive);
        assert_eq!(orch.fail_count(), 1);

        orch.context().config.update(|c| c.is_enabled = true);
        orch.on_level_failed();
        assert_eq!(orch.fail_count(), 2);
    }

    #[tokio::test]
    async fn test_repeat_policy_is_read_fresh() {
        let config = BailOutConfig {
            repeat_fail_effect: false,
            ..Default::default()
        };
        let mut orch = orchestrator(config, GameplaySetup::multiplayer());
        orch.on_level_failed();

        let FailureOutcome::Handled(report) = orch.on_level_failed() else {
            panic!("should be enabled");
        };
        assert_eq!(report.indicator, TriggerOutcome::Suppressed);
        assert!(!report.counter_updated);
        assert!(!report.animation_played);

        orch.context().config.update(|c| c.repeat_fail_effect = true);
        let FailureOutcome::Handled(report) = orch.on_level_failed() else {
            panic!("should be enabled");
        };
        assert_eq!(report.indicator, TriggerOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_failures_after_teardown_are_ignored() {
        let mut orch = orchestrator(BailOutConfig::default(), GameplaySetup::multiplayer());
        orch.on_level_failed();
        orch.teardown();
        orch.teardown();

        assert_eq!(orch.on_level_failed(), FailureOutcome::Inactive);
        assert_eq!(orch.fail_count(), 1);
    }
}
