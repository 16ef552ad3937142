//! Scenario playback.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::config::{ConfigStore, Vector3};
use crate::controller::{Collaborators, FailureOrchestrator, FailureOutcome, MatchContext};
use crate::session::{InMemorySession, MatchEndHandler, ParticipantSnapshot};
use crate::sim::presenters::{LogAnimation, LogCounterText, LogIndicator};
use crate::sim::scenario::{Action, Scenario};

/// How a scenario run went.
#[derive(Debug, Clone, Serialize)]
pub struct SimSummary {
    pub match_id: String,
    pub fail_count: u32,
    pub counter_text: String,
    pub indicator_shows: usize,
    pub indicator_hides: usize,
    pub animation_plays: usize,
    pub forced_match_end: bool,
    /// Where the counter text was last placed, if it ever was.
    pub counter_position: Option<Vector3>,
    pub elapsed_secs: f64,
}

/// Forwards forced match ends to the runner.
struct HostMatchEnd {
    session: Arc<InMemorySession>,
    tx: mpsc::UnboundedSender<()>,
}

impl MatchEndHandler for HostMatchEnd {
    fn force_match_end(&self) {
        self.session.force_match_end();
        let _ = self.tx.send(());
    }
}

fn event_deadline(started: Instant, at_secs: f64) -> Option<Instant> {
    let offset = Duration::try_from_secs_f64(at_secs).ok()?;
    started.checked_add(offset)
}

/// Play a scenario against a fresh orchestrator.
///
/// `config` is shared with the caller so a file watcher can keep updating it
/// while the scenario runs.
pub async fn run_scenario(scenario: Scenario, config: ConfigStore) -> SimSummary {
    let session = Arc::new(InMemorySession::offline());
    session.set_connected(scenario.session.connected);
    session.add_participant(ParticipantSnapshot::local(scenario.session.local_id.clone()));
    for remote in &scenario.session.remotes {
        session.add_participant(ParticipantSnapshot::remote(remote.clone()));
    }

    let (end_tx, mut end_rx) = mpsc::unbounded_channel();
    let indicator = Arc::new(LogIndicator::default());
    let animation = Arc::new(LogAnimation::default());
    let counter = Arc::new(LogCounterText::default());

    let collaborators = Collaborators::default()
        .with_session(session.clone())
        .with_match_end(Arc::new(HostMatchEnd {
            session: session.clone(),
            tx: end_tx,
        }))
        .with_indicator(indicator.clone())
        .with_animation(animation.clone())
        .with_counter(counter.clone());

    let context = MatchContext::new(config, scenario.gameplay);
    let mut orchestrator = FailureOrchestrator::new(context, collaborators);
    orchestrator.start();

    let started = Instant::now();
    let mut forced_match_end = false;

    for event in &scenario.events {
        let Some(at) = event_deadline(started, event.at_secs) else {
            tracing::warn!(at_secs = event.at_secs, "Event time out of range, skipping");
            continue;
        };

        tokio::select! {
            _ = sleep_until(at) => {}
            Some(()) = end_rx.recv() => {
                forced_match_end = true;
                break;
            }
        }

        tracing::debug!(at_secs = event.at_secs, action = ?event.action, "Scenario event");
        match &event.action {
            Action::LocalFail => {
                if let FailureOutcome::Handled(report) = orchestrator.on_level_failed() {
                    tracing::debug!(?report, "Local failure handled");
                }
            }
            Action::RemoteFail { participant } => {
                if !session.fail_participant(participant) {
                    tracing::warn!(participant = %participant, "Unknown participant in scenario");
                }
            }
            Action::Disconnect => session.clear(),
            Action::HideEffect => orchestrator.hide_fail_effect(),
            Action::Teardown => break,
        }
    }

    orchestrator.teardown();

    SimSummary {
        match_id: orchestrator.match_id().to_string(),
        fail_count: orchestrator.fail_count(),
        counter_text: counter.text(),
        indicator_shows: indicator.shows(),
        indicator_hides: indicator.hides(),
        animation_plays: animation.plays(),
        forced_match_end: forced_match_end || session.forced_end_count() > 0,
        counter_position: counter.placement().map(|p| p.position),
        elapsed_secs: started.elapsed().as_secs_f64(),
    }
}
